//! Path prompt widget, shown in place of the file bar while choosing a file

use pyfix_app::PathInputState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

const PROMPT: &str = " Open: ";

pub struct PathPrompt<'a> {
    input: &'a PathInputState,
}

impl<'a> PathPrompt<'a> {
    pub fn new(input: &'a PathInputState) -> Self {
        Self { input }
    }
}

impl Widget for PathPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = styles::glass_block(true)
            .title(Line::from(" Choose a Python file (*.py) ").style(styles::accent_bold()))
            .title_bottom(
                Line::from(" Enter open  Esc cancel  Ctrl+U clear ").style(styles::text_muted()),
            );
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Prompt plus trailing cursor cell
        let available = (inner.width as usize).saturating_sub(PROMPT.width() + 1);
        let visible = tail_within(&self.input.buffer, available);

        let line = Line::from(vec![
            Span::styled(PROMPT, styles::keybinding()),
            Span::styled(visible.to_string(), styles::text_primary()),
            Span::styled("_", styles::keybinding()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

/// Longest suffix of `text` whose display width fits in `max_width`
fn tail_within(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }

    let mut width = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = index;
    }
    &text[start..]
}
