//! Rendering helpers for widget and screen tests
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.draw_with(|frame| view(frame, &mut state));
//! assert!(term.buffer_contains("Syntax Check"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// A typical terminal, large enough for the full six-panel grid
pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// A cramped terminal for checking that widgets degrade instead of overflowing
pub const COMPACT_SIZE: (u16, u16) = (40, 12);

/// Off-screen terminal backed by ratatui's `TestBackend`
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE.0, DEFAULT_SIZE.1)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_SIZE.0, COMPACT_SIZE.1)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal construction cannot fail");
        Self { terminal }
    }

    /// Whole drawable area
    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    pub fn draw_with<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("drawing to TestBackend failed");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        rows(self.buffer()).iter().any(|row| row.contains(text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        rows(self.buffer())
            .get(line as usize)
            .is_some_and(|row| row.contains(text))
    }

    /// The whole screen, one row per line, for snapshots
    pub fn content(&self) -> String {
        rows(self.buffer()).join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell position where `text` begins, comparing one char per cell
pub fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
    let needle: Vec<char> = text.chars().collect();
    let width = buffer.area.width as usize;
    if needle.is_empty() || needle.len() > width {
        return None;
    }

    (0..buffer.area.height).find_map(|y| {
        (0..=width - needle.len())
            .find(|&x| {
                needle.iter().enumerate().all(|(i, c)| {
                    let mut expected = [0u8; 4];
                    buffer[((x + i) as u16, y)].symbol() == c.encode_utf8(&mut expected)
                })
            })
            .map(|x| (x as u16, y))
    })
}

/// Every buffer row as a string, one symbol per cell
fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_find_text_reports_first_cell() {
        let mut term = TestTerminal::new();
        term.render_widget(Paragraph::new("\n  hello"), term.area());

        assert_eq!(find_text(term.buffer(), "hello"), Some((2, 1)));
        assert_eq!(find_text(term.buffer(), "absent"), None);
        assert_eq!(find_text(term.buffer(), ""), None);
    }

    #[test]
    fn test_line_contains_is_row_scoped() {
        let mut term = TestTerminal::compact();
        term.render_widget(Paragraph::new("top\nbottom"), term.area());

        assert!(term.line_contains(0, "top"));
        assert!(!term.line_contains(0, "bottom"));
        assert!(term.line_contains(1, "bottom"));
        assert!(!term.line_contains(99, "top"));
        assert!(term.content().starts_with("top   "));
        assert_eq!(term.content().lines().count(), 12);
    }
}
