//! Test utilities for the analysis service
//!
//! Provides a scripted [`MockAnalysisService`] and helpers for building
//! files and results.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pyfix_core::{AnalysisResult, Error, FileCandidate, Result, SelectedFile};

use crate::service::AnalysisService;

/// Builds a selected file named `name` holding `source`.
///
/// # Panics
/// If `name` does not end with `.py`.
pub fn selected_file(name: &str, source: &str) -> SelectedFile {
    FileCandidate::new(name, format!("/tmp/{}", name), source.as_bytes().to_vec())
        .into_selected()
        .expect("test file names must end with .py")
}

/// A result with distinct values in every field
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        syntax_check: "OK".to_string(),
        pylint_results: "C0114: Missing module docstring".to_string(),
        original_test_results: "FAILED (failures=1)".to_string(),
        original_test_success: false,
        logical_fix_explanation: "Divide by zero is not handled".to_string(),
        fixed_code: "def div(a, b):\n    return a / b if b else None".to_string(),
        fixed_test_results: "Ran 4 tests OK".to_string(),
        fixed_test_success: true,
    }
}

/// What [`MockAnalysisService`] answers with
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Success(AnalysisResult),
    /// Non-success status, e.g. `"500 Internal Server Error"`
    HttpStatus(String),
    /// Transport failure text, e.g. `"connection refused"`
    Transport(String),
}

/// Scripted analysis service that records every upload
#[derive(Debug, Clone)]
pub struct MockAnalysisService {
    outcome: MockOutcome,
    calls: Arc<AtomicUsize>,
    uploaded: Arc<Mutex<Vec<String>>>,
}

impl MockAnalysisService {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
            uploaded: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn succeeding(result: AnalysisResult) -> Self {
        Self::new(MockOutcome::Success(result))
    }

    pub fn failing_with_status(status: &str) -> Self {
        Self::new(MockOutcome::HttpStatus(status.to_string()))
    }

    pub fn refusing() -> Self {
        Self::new(MockOutcome::Transport(
            "error sending request: tcp connect error: Connection refused (os error 111)"
                .to_string(),
        ))
    }

    /// Number of `analyze` calls so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// File names uploaded so far, in order
    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploaded.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut names) = self.uploaded.lock() {
            names.push(file.name().to_string());
        }
        match &self.outcome {
            MockOutcome::Success(result) => Ok(result.clone()),
            MockOutcome::HttpStatus(status) => Err(Error::http(status.clone())),
            MockOutcome::Transport(message) => Err(Error::transport(message.clone())),
        }
    }

    fn describe(&self) -> String {
        "mock://analysis".to_string()
    }
}
