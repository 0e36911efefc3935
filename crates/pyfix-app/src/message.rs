//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use pyfix_core::{AnalysisResult, FileCandidate};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Poll timeout; drives the busy spinner
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // File Selection
    // ─────────────────────────────────────────────────────────
    /// Open the path prompt
    OpenPathInput,
    /// Type a character into the path prompt
    PathInputChar(char),
    /// Delete the character before the end of the prompt
    PathInputBackspace,
    /// Clear the whole prompt
    PathInputClear,
    /// Close the prompt without reading anything
    PathInputCancel,
    /// Read the path currently in the prompt
    PathInputSubmit,
    /// Read a file from disk (command-line argument)
    LoadFile { path: PathBuf },
    /// A file was picked and read; its name is not validated yet
    FileChosen(FileCandidate),
    /// Reading a picked path failed
    FileReadFailed { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────
    /// Upload the selected file
    Analyze,
    /// The service answered with a parsed result
    AnalysisCompleted { result: AnalysisResult },
    /// The upload failed (status, transport, or body)
    AnalysisFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Results View
    // ─────────────────────────────────────────────────────────
    FocusNextPanel,
    FocusPrevPanel,
    ScrollPanelUp(u16),
    ScrollPanelDown(u16),
    ScrollPanelTop,
    /// Toggle the focused panel filling the results region
    ToggleZoom,
}
