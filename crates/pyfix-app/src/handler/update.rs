//! Main update function - handles state transitions (TEA pattern)

use std::path::PathBuf;

use pyfix_core::prelude::*;

use super::{keys, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::{AppState, UiMode, NO_FILE_ERROR};

/// Process a message and update state.
/// Returns an optional follow-up message and an optional action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.advance_spinner();
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // File Selection
        // ─────────────────────────────────────────────────────────
        Message::OpenPathInput => {
            if let Some(file) = &state.selected_file {
                let path = file.path().to_path_buf();
                state.path_input.prefill(&path);
            }
            state.ui_mode = UiMode::PathInput;
            UpdateResult::none()
        }

        Message::PathInputChar(c) => {
            state.path_input.push(c);
            UpdateResult::none()
        }

        Message::PathInputBackspace => {
            state.path_input.backspace();
            UpdateResult::none()
        }

        Message::PathInputClear => {
            state.path_input.clear();
            UpdateResult::none()
        }

        Message::PathInputCancel => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::PathInputSubmit => {
            state.ui_mode = UiMode::Normal;
            match state.path_input.value() {
                Some(input) => UpdateResult::action(UpdateAction::ReadFile {
                    path: expand_home(input),
                }),
                None => UpdateResult::none(),
            }
        }

        Message::LoadFile { path } => UpdateResult::action(UpdateAction::ReadFile { path }),

        Message::FileChosen(candidate) => {
            debug!("File chosen: {} ({:?})", candidate.name, candidate.path);
            state.select_file(candidate);
            if let Some(error) = state.error_text() {
                warn!("{}", error);
            }
            UpdateResult::none()
        }

        Message::FileReadFailed { path, error } => {
            warn!("Failed to read {:?}", path);
            state.reject_file(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis
        // ─────────────────────────────────────────────────────────
        Message::Analyze => {
            let Some(file) = state.selected_file.clone() else {
                state.error = Some(NO_FILE_ERROR.to_string());
                return UpdateResult::none();
            };
            info!("Analyzing {} ({})", file.name(), file.display_size());
            state.begin_analysis(&file);
            UpdateResult::action(UpdateAction::UploadFile { file })
        }

        Message::AnalysisCompleted { result } => {
            info!("Analysis completed");
            state.complete_analysis(result);
            UpdateResult::none()
        }

        Message::AnalysisFailed { error } => {
            warn!("Analysis failed: {}", error);
            state.fail_analysis(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Results View
        // ─────────────────────────────────────────────────────────
        Message::FocusNextPanel => {
            let count = state.panels().len();
            state.results_view.focus_next(count);
            UpdateResult::none()
        }

        Message::FocusPrevPanel => {
            let count = state.panels().len();
            state.results_view.focus_prev(count);
            UpdateResult::none()
        }

        Message::ScrollPanelUp(amount) => {
            state.results_view.scroll_up(amount);
            UpdateResult::none()
        }

        Message::ScrollPanelDown(amount) => {
            state.results_view.scroll_down(amount);
            UpdateResult::none()
        }

        Message::ScrollPanelTop => {
            state.results_view.scroll_to_top();
            UpdateResult::none()
        }

        Message::ToggleZoom => {
            state.results_view.toggle_zoom();
            UpdateResult::none()
        }
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}
