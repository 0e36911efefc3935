//! Application state (Model in TEA pattern)

use std::path::Path;

use pyfix_core::{AnalysisRecord, AnalysisResult, AppPhase, FileCandidate, SelectedFile};

use crate::config::Settings;
use crate::panels::{self, ResultPanel};

/// Shown when the picked file does not end with `.py`
pub const INVALID_EXTENSION_ERROR: &str = "Please select a Python (.py) file";

/// Shown when Analyze runs before any file is selected
pub const NO_FILE_ERROR: &str = "Please select a file first";

/// Spinner frames cycled by `Tick` while busy
pub const SPINNER_FRAMES: usize = 10;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Results view with key bindings active
    #[default]
    Normal,

    /// Path prompt capturing text
    PathInput,
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Prompt
// ─────────────────────────────────────────────────────────────────────────────

/// Text buffer behind the path prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathInputState {
    pub buffer: String,
}

impl PathInputState {
    /// Replace the buffer, e.g. with the current file's path
    pub fn prefill(&mut self, path: &Path) {
        self.buffer = path.to_string_lossy().into_owned();
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Trimmed buffer, or `None` when it holds only whitespace
    pub fn value(&self) -> Option<&str> {
        let trimmed = self.buffer.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Results View
// ─────────────────────────────────────────────────────────────────────────────

/// Focus, scroll, and zoom of the results region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsViewState {
    /// Index of the focused panel
    pub focused: usize,
    /// First visible line of the focused panel
    pub scroll: u16,
    /// Focused panel fills the whole region
    pub zoomed: bool,
    /// Rendered (wrapped) line count of the focused panel, set by the view
    pub content_lines: usize,
    /// Body rows the focused panel had on screen, set by the view
    pub visible_lines: usize,
}

impl ResultsViewState {
    pub fn focus_next(&mut self, panel_count: usize) {
        if panel_count == 0 {
            return;
        }
        self.focused = (self.focused + 1) % panel_count;
        self.forget_content_size();
    }

    pub fn focus_prev(&mut self, panel_count: usize) {
        if panel_count == 0 {
            return;
        }
        self.focused = (self.focused + panel_count - 1) % panel_count;
        self.forget_content_size();
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// Scroll down, stopping once the last line reaches the bottom row
    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_add(amount).min(self.max_scroll());
    }

    /// Largest scroll that still fills the viewport
    pub fn max_scroll(&self) -> u16 {
        let max = self.content_lines.saturating_sub(self.visible_lines);
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    /// Record the focused panel's wrapped height and viewport after a render.
    /// A resize or zoom can shrink the content, so the scroll is re-clamped.
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.content_lines = total;
        self.visible_lines = visible;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn toggle_zoom(&mut self) {
        self.zoomed = !self.zoomed;
    }

    /// Keep focus in range after the panel set changes
    fn reset_for(&mut self, panel_count: usize) {
        if self.focused >= panel_count {
            self.focused = 0;
        }
        self.forget_content_size();
    }

    /// A different panel is focused; its size is unknown until the next frame
    fn forget_content_size(&mut self) {
        self.scroll = 0;
        self.content_lines = 0;
        self.visible_lines = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,

    /// Upload target, shown in the header
    pub server_label: String,

    /// The file Analyze will upload
    pub selected_file: Option<SelectedFile>,

    /// An upload is in flight
    pub busy: bool,

    /// Name of the file being uploaded, recorded on the result
    pub in_flight: Option<String>,

    /// Banner text; `None` hides the banner
    pub error: Option<String>,

    /// Last successful analysis
    pub analysis: Option<AnalysisRecord>,

    pub path_input: PathInputState,
    pub results_view: ResultsViewState,
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Set the upload target shown in the header
    pub fn with_server_label(mut self, label: impl Into<String>) -> Self {
        self.server_label = label.into();
        self
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// The action control is enabled: a file is selected and nothing is in flight
    pub fn can_analyze(&self) -> bool {
        self.selected_file.is_some() && !self.busy
    }

    /// Banner text, treating an empty string as no error
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref().map(|record| &record.result)
    }

    /// Panels the results region currently shows
    pub fn panels(&self) -> Vec<ResultPanel> {
        match self.result() {
            Some(result) => panels::result_panels(result).to_vec(),
            None => panels::placeholder_panels().to_vec(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Accept or reject a picked file. Never touches the result.
    pub fn select_file(&mut self, candidate: FileCandidate) {
        match candidate.into_selected() {
            Some(file) => {
                self.selected_file = Some(file);
                self.error = None;
            }
            None => {
                self.selected_file = None;
                self.error = Some(INVALID_EXTENSION_ERROR.to_string());
            }
        }
    }

    /// A picked path could not be read; behaves like an invalid selection
    pub fn reject_file(&mut self, error: impl Into<String>) {
        self.selected_file = None;
        self.error = Some(error.into());
    }

    /// Enter busy for `file`'s upload
    pub fn begin_analysis(&mut self, file: &SelectedFile) {
        self.busy = true;
        self.error = None;
        self.in_flight = Some(file.name().to_string());
        self.spinner_frame = 0;
    }

    /// Replace the stored result wholesale and leave busy
    pub fn complete_analysis(&mut self, result: AnalysisResult) {
        let file_name = self
            .in_flight
            .take()
            .or_else(|| self.selected_file.as_ref().map(|f| f.name().to_string()))
            .unwrap_or_default();

        let had_result = self.analysis.is_some();
        self.analysis = Some(AnalysisRecord::new(result, file_name));
        self.busy = false;

        if !had_result {
            self.results_view = ResultsViewState::default();
        } else {
            self.results_view.reset_for(panels::RESULT_PANEL_COUNT);
        }
    }

    /// Leave busy with an error; the previous result stays
    pub fn fail_analysis(&mut self, error: impl Into<String>) {
        self.busy = false;
        self.in_flight = None;
        self.error = Some(error.into());
    }

    pub fn advance_spinner(&mut self) {
        if self.busy {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str) -> FileCandidate {
        FileCandidate::new(name, format!("/work/{}", name), b"print(1)\n".to_vec())
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert!(state.selected_file.is_none());
        assert!(!state.busy);
        assert!(state.error_text().is_none());
        assert!(state.analysis.is_none());
        assert!(!state.can_analyze());
        assert_eq!(state.panels().len(), 2);
    }

    #[test]
    fn test_empty_error_counts_as_none() {
        let mut state = AppState::new();
        state.error = Some(String::new());
        assert!(state.error_text().is_none());
    }

    #[test]
    fn test_select_invalid_then_valid() {
        let mut state = AppState::new();

        state.select_file(candidate("notes.txt"));
        assert!(state.selected_file.is_none());
        assert_eq!(state.error_text(), Some(INVALID_EXTENSION_ERROR));

        state.select_file(candidate("main.py"));
        assert_eq!(state.selected_file.as_ref().map(|f| f.name()), Some("main.py"));
        assert!(state.error_text().is_none());
        assert!(state.can_analyze());
    }

    #[test]
    fn test_extension_check_is_case_sensitive() {
        let mut state = AppState::new();
        state.select_file(candidate("MAIN.PY"));
        assert!(state.selected_file.is_none());
    }

    #[test]
    fn test_spinner_only_moves_while_busy() {
        let mut state = AppState::new();
        state.advance_spinner();
        assert_eq!(state.spinner_frame, 0);

        state.busy = true;
        for _ in 0..SPINNER_FRAMES + 1 {
            state.advance_spinner();
        }
        assert_eq!(state.spinner_frame, 1);
    }

    #[test]
    fn test_focus_wraps() {
        let mut view = ResultsViewState::default();
        view.focus_prev(6);
        assert_eq!(view.focused, 5);
        view.focus_next(6);
        assert_eq!(view.focused, 0);
    }

    #[test]
    fn test_scroll_is_clamped_to_rendered_height() {
        let mut view = ResultsViewState::default();
        view.update_content_size(40, 10);
        view.scroll_down(100);
        assert_eq!(view.scroll, 30);
        view.scroll_up(10);
        assert_eq!(view.scroll, 20);
    }

    #[test]
    fn test_scroll_stays_put_before_first_render() {
        let mut view = ResultsViewState::default();
        view.scroll_down(5);
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_shrinking_content_reclamps_scroll() {
        let mut view = ResultsViewState::default();
        view.update_content_size(100, 10);
        view.scroll_down(80);
        assert_eq!(view.scroll, 80);

        // Zoomed in: more rows and a wider wrap
        view.update_content_size(50, 20);
        assert_eq!(view.scroll, 30);
    }

    #[test]
    fn test_focus_change_resets_scroll() {
        let mut view = ResultsViewState {
            scroll: 5,
            content_lines: 30,
            visible_lines: 10,
            ..Default::default()
        };
        view.focus_next(2);
        assert_eq!(view.scroll, 0);
        assert_eq!(view.max_scroll(), 0);
    }

    #[test]
    fn test_path_input_value_trims() {
        let mut input = PathInputState::default();
        assert!(input.value().is_none());
        input.buffer = "  ./a.py ".to_string();
        assert_eq!(input.value(), Some("./a.py"));
    }
}
