//! Bottom status bar

use pyfix_app::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// One-line status: last result and navigation hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode {
            UiMode::PathInput => &[("Enter", "open"), ("Esc", "cancel")],
            UiMode::Normal if self.state.analysis.is_some() => &[
                ("Tab", "focus"),
                ("j/k", "scroll"),
                ("z", "zoom"),
                ("q", "quit"),
            ],
            UiMode::Normal => &[("o", "open"), ("q", "quit")],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        match &self.state.analysis {
            Some(record) => {
                spans.push(Span::styled(" Last result: ", styles::text_muted()));
                spans.push(Span::styled(record.file_name.clone(), styles::text_secondary()));
                spans.push(Span::styled(
                    format!(" at {}", record.received_time()),
                    styles::text_muted(),
                ));
            }
            None => spans.push(Span::styled(" No analysis yet", styles::text_muted())),
        }

        spans.push(Span::raw("   "));
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pyfix_core::AnalysisRecord;
    use pyfix_client::test_utils::sample_result;

    #[test]
    fn test_status_before_first_result() {
        let state = AppState::new();
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.line_contains(0, "No analysis yet"));
        assert!(term.line_contains(0, "o open"));
    }

    #[test]
    fn test_status_after_result() {
        let mut state = AppState::new();
        state.analysis = Some(AnalysisRecord::new(sample_result(), "calc.py"));

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.line_contains(0, "Last result: calc.py at "));
        assert!(term.line_contains(0, "Tab focus"));
    }
}
