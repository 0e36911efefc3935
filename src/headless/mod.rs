//! Headless mode - NDJSON event output for scripts
//!
//! Runs one select-and-analyze round without a terminal UI and writes one
//! JSON object per line to stdout.
//!
//! # Example Output
//!
//! ```json
//! {"event":"file_selected","file":"calc.py","size":412,"timestamp":1704700001000}
//! {"event":"analysis_started","file":"calc.py","endpoint":"http://localhost:8000/upload","timestamp":1704700001002}
//! {"event":"analysis_completed","file":"calc.py","result":{"syntax_check":"OK",...},"timestamp":1704700004210}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use pyfix_core::{AnalysisResult, Result};
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A `.py` file was read and accepted
    FileSelected {
        file: String,
        size: usize,
        timestamp: i64,
    },

    /// The upload request is on its way
    AnalysisStarted {
        file: String,
        endpoint: String,
        timestamp: i64,
    },

    /// The service answered with a result
    AnalysisCompleted {
        file: String,
        result: AnalysisResult,
        timestamp: i64,
    },

    /// Selection or analysis failed
    Error { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as one JSON line
    pub fn emit_to<W: Write>(&self, out: &mut W) {
        let written = self.to_line().and_then(|line| {
            writeln!(out, "{}", line)?;
            out.flush()?;
            Ok(())
        });
        if let Err(e) = written {
            error!("Failed to emit headless event: {}", e);
        }
    }

    fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn file_selected(file: &str, size: usize) -> Self {
        Self::FileSelected {
            file: file.to_string(),
            size,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_started(file: &str, endpoint: &str) -> Self {
        Self::AnalysisStarted {
            file: file.to_string(),
            endpoint: endpoint.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_completed(file: &str, result: AnalysisResult) -> Self {
        Self::AnalysisCompleted {
            file: file.to_string(),
            result,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: Self::now(),
        }
    }
}
