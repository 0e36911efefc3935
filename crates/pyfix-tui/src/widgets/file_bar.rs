//! File bar: the selected file and the Analyze control

use pyfix_core::SelectedFile;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Control label while idle
pub const ANALYZE_LABEL: &str = "Analyze";

/// Control label while an upload is in flight
pub const BUSY_LABEL: &str = "Analyzing…";

/// Selected file on the left, action control on the right
pub struct FileBar<'a> {
    file: Option<&'a SelectedFile>,
    busy: bool,
    enabled: bool,
    spinner_frame: usize,
    icons: IconSet,
}

impl<'a> FileBar<'a> {
    pub fn new(file: Option<&'a SelectedFile>, icons: IconSet) -> Self {
        Self {
            file,
            busy: false,
            enabled: false,
            spinner_frame: 0,
            icons,
        }
    }

    /// Show the busy label and spinner
    pub fn busy(mut self, busy: bool, spinner_frame: usize) -> Self {
        self.busy = busy;
        self.spinner_frame = spinner_frame;
        self
    }

    /// Whether the control accepts the Analyze key
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn control(&self) -> Line<'static> {
        let style = if self.enabled {
            styles::button_enabled()
        } else {
            styles::button_disabled()
        };

        if self.busy {
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.icons.spinner(self.spinner_frame)),
                    styles::accent(),
                ),
                Span::styled(format!(" {} ", BUSY_LABEL), style),
            ])
        } else {
            Line::from(Span::styled(format!(" {} ", ANALYZE_LABEL), style))
        }
    }

    fn file_line(&self) -> Line<'static> {
        match self.file {
            Some(file) => Line::from(vec![
                Span::styled(format!(" {} ", self.icons.file()), styles::accent()),
                Span::styled(file.name().to_string(), styles::text_primary()),
                Span::styled(format!("  {}", file.display_size()), styles::text_muted()),
            ]),
            None => Line::from(vec![
                Span::styled(format!(" {} ", self.icons.file()), styles::text_muted()),
                Span::styled("No file selected", styles::text_muted()),
                Span::styled("  press ", styles::text_muted()),
                Span::styled("o", styles::keybinding()),
                Span::styled(" to choose a .py file", styles::text_muted()),
            ]),
        }
    }
}

impl Widget for FileBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" File ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let control = self.control();
        let control_width = (control.width() as u16 + 1).min(inner.width);
        let [file_area, control_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(control_width)])
                .areas(inner);

        Paragraph::new(self.file_line()).render(file_area, buf);
        Paragraph::new(control).render(control_area, buf);
    }
}
