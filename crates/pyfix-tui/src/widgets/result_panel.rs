//! One titled result panel, with an optional PASSED/FAILED badge

use pyfix_app::ResultPanel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct ResultPanelView<'a> {
    panel: &'a ResultPanel,
    icons: IconSet,
    focused: bool,
    scroll: u16,
}

impl<'a> ResultPanelView<'a> {
    pub fn new(panel: &'a ResultPanel, icons: IconSet) -> Self {
        Self {
            panel,
            icons,
            focused: false,
            scroll: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// `(wrapped body lines, body rows)` when drawn into `area`
    pub fn content_size(&self, area: Rect) -> (usize, usize) {
        let inner = styles::glass_block(self.focused).inner(area);
        let total = self.body().line_count(inner.width);
        (total, inner.height as usize)
    }

    fn body(&self) -> Paragraph<'a> {
        let text = Text::styled(self.panel.body.as_str(), self.body_style());
        let paragraph = Paragraph::new(text);
        if self.panel.kind.is_code() {
            paragraph
        } else {
            paragraph.wrap(Wrap { trim: false })
        }
    }

    fn body_style(&self) -> Style {
        if self.panel.kind.is_placeholder() {
            styles::text_secondary()
        } else if self.panel.kind.is_code() {
            styles::code()
        } else {
            styles::text_primary()
        }
    }
}

impl Widget for ResultPanelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = if self.focused {
            styles::accent_bold()
        } else {
            Style::default().fg(palette::TEXT_PRIMARY)
        };

        let icon = self.icons.panel(self.panel.kind);
        let mut block = styles::glass_block(self.focused).title(Line::from(vec![
            Span::styled(format!(" {} ", icon), styles::accent()),
            Span::styled(format!("{} ", self.panel.title), title_style),
        ]));

        if let Some(passed) = self.panel.status {
            let (label, style) = styles::test_badge(passed);
            let badge = Line::from(Span::styled(format!(" {} ", label), style)).right_aligned();
            block = block.title(badge);
        }

        self.body()
            .block(block)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
