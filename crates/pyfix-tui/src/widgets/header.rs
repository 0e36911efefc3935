//! Header bar widget
//!
//! App title, upload target, and the main keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, palette, styles};

/// Main header showing app title, server, and keybindings
pub struct MainHeader<'a> {
    server: &'a str,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(server: &'a str, icons: IconSet) -> Self {
        Self { server, icons }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::styled(format!(" {} ", self.icons.app()), styles::accent()),
            Span::styled(
                "PyFix",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.server.is_empty() {
            left.push(Span::styled("  ", styles::text_muted()));
            left.push(Span::styled(
                format!("{} {}", self.icons.globe(), self.server),
                styles::text_secondary(),
            ));
        }

        let shortcuts = shortcut_spans();
        let left_width: usize = left.iter().map(|s| s.content.width()).sum();
        let shortcuts_width: usize = shortcuts.iter().map(|s| s.content.width()).sum();

        // Right-align the shortcuts when they fit
        if left_width + shortcuts_width + 2 <= inner.width as usize {
            let padding = inner.width as usize - left_width - shortcuts_width;
            left.push(Span::raw(" ".repeat(padding)));
            left.extend(shortcuts);
        }

        Paragraph::new(Line::from(left)).render(inner, buf);
    }
}

fn shortcut_spans() -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (key, label) in [("o", "open"), ("a", "analyze"), ("q", "quit")] {
        spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
        spans.push(Span::styled(format!(" {} ", label), styles::text_muted()));
    }
    spans
}
