//! Headless mode runner - one analysis round without a TUI

use std::io::Write;
use std::path::Path;

use pyfix_app::{Engine, Message};
use pyfix_client::AnalysisService;
use pyfix_core::prelude::*;

use super::HeadlessEvent;

/// Read `file`, analyze it, and write NDJSON events to `out`.
///
/// Returns `Ok(true)` when a result arrived, `Ok(false)` after an error
/// event (invalid file, unreadable path, failed upload, or interruption).
pub async fn run_headless<S, W>(mut engine: Engine<S>, file: &Path, out: &mut W) -> Result<bool>
where
    S: AnalysisService + Send + Sync + 'static,
    W: Write,
{
    info!("PyFix starting in HEADLESS mode for {}", file.display());
    engine.spawn_signal_handler();

    // Select
    engine.process_message(Message::LoadFile {
        path: file.to_path_buf(),
    });
    wait_for(&mut engine, |state| {
        state.selected_file.is_some() || state.error_text().is_some()
    })
    .await?;

    if let Some(message) = failure(&engine) {
        HeadlessEvent::error(message).emit_to(out);
        return Ok(false);
    }
    let (name, size) = match &engine.state.selected_file {
        Some(selected) => (selected.name().to_string(), selected.size()),
        None => {
            HeadlessEvent::error(pyfix_app::state::NO_FILE_ERROR).emit_to(out);
            return Ok(false);
        }
    };
    HeadlessEvent::file_selected(&name, size).emit_to(out);

    // Analyze
    engine.process_message(Message::Analyze);
    HeadlessEvent::analysis_started(&name, &engine.state.server_label).emit_to(out);
    wait_for(&mut engine, |state| !state.busy).await?;

    if let Some(message) = failure(&engine) {
        HeadlessEvent::error(message).emit_to(out);
        return Ok(false);
    }
    match engine.state.result() {
        Some(result) => {
            HeadlessEvent::analysis_completed(&name, result.clone()).emit_to(out);
            info!("Headless analysis of {} completed", name);
            Ok(true)
        }
        None => {
            HeadlessEvent::error("Analysis finished without a result").emit_to(out);
            Ok(false)
        }
    }
}

/// Error text to report, including an interruption by signal
fn failure<S>(engine: &Engine<S>) -> Option<String>
where
    S: AnalysisService + Send + Sync + 'static,
{
    if engine.should_quit() {
        return Some("Interrupted".to_string());
    }
    engine.state.error_text().map(str::to_string)
}

/// Process messages until `done` holds or a quit is requested
async fn wait_for<S, F>(engine: &mut Engine<S>, done: F) -> Result<()>
where
    S: AnalysisService + Send + Sync + 'static,
    F: Fn(&pyfix_app::AppState) -> bool,
{
    while !done(&engine.state) && !engine.should_quit() {
        match engine.next_message().await {
            Some(msg) => engine.process_message(msg),
            None => return Err(Error::ChannelClosed),
        }
    }
    Ok(())
}
