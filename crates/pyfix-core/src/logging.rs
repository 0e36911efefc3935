//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "PYFIX_LOG";

const LOG_FILE_NAME: &str = "pyfix.log";

/// Info for our crates, warn for dependencies
const DEFAULT_FILTER: &str = "pyfix=info,pyfix_app=info,pyfix_client=info,pyfix_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/pyfix/logs/` because the terminal is
/// owned by the TUI (and by NDJSON output in headless mode).
/// Log level is controlled by the `PYFIX_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PYFIX_LOG=debug cargo run -- script.py
/// PYFIX_LOG=pyfix_client=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("PyFix starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("pyfix").join("logs")
}
