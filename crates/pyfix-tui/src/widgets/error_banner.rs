//! Inline error banner above the results region

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

/// Message rows the banner grows to before cutting the text off
pub const MAX_BANNER_LINES: u16 = 4;

/// Rows taken by the top and bottom rules
const RULE_ROWS: u16 = 2;

/// Error text with no dismiss control. It stays until Analyze starts or a
/// valid `.py` file is selected.
pub struct ErrorBanner<'a> {
    message: &'a str,
    icons: IconSet,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str, icons: IconSet) -> Self {
        Self { message, icons }
    }

    /// Rows needed to show the whole message at `width`, rules included
    pub fn height(&self, width: u16) -> u16 {
        let lines = self.text().line_count(width).max(1);
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .min(MAX_BANNER_LINES)
            + RULE_ROWS
    }

    fn text(&self) -> Paragraph<'a> {
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.icons.alert()), styles::banner()),
            Span::styled(self.message, styles::banner()),
        ]);
        Paragraph::new(line).wrap(Wrap { trim: false })
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(styles::banner())
            .style(styles::banner());

        self.text().block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pyfix_app::config::IconMode;

    const REFUSED: &str = "Request failed: error sending request for url \
        (http://localhost:8000/upload): client error (Connect): tcp connect error: \
        Connection refused (os error 111)";

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_banner_shows_message() {
        let mut term = TestTerminal::new();
        let banner = ErrorBanner::new(
            "Analysis service returned HTTP 500 Internal Server Error",
            icons(),
        );
        term.render_widget(banner, Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "HTTP 500 Internal Server Error"));
        assert!(term.line_contains(1, "⚠"));
    }

    #[test]
    fn test_short_message_takes_one_row() {
        let banner = ErrorBanner::new("Please select a file first", icons());
        assert_eq!(banner.height(80), 3);
    }

    #[test]
    fn test_long_message_wraps_to_its_end() {
        let banner = ErrorBanner::new(REFUSED, icons());
        let height = banner.height(80);
        assert_eq!(height, 4);

        let mut term = TestTerminal::new();
        term.render_widget(banner, Rect::new(0, 0, 80, height));

        assert!(term.line_contains(1, "Request failed"));
        assert!(term.buffer_contains("Connection refused (os error 111)"));
    }

    #[test]
    fn test_height_is_capped() {
        let message = "boom ".repeat(200);
        let banner = ErrorBanner::new(&message, icons());
        assert_eq!(banner.height(40), MAX_BANNER_LINES + RULE_ROWS);
    }
}
