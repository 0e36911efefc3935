//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime from the configured `IconMode`:
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires a Nerd Font)

use pyfix_app::config::IconMode;
use pyfix_app::PanelKind;

/// Braille spinner shown while an upload is in flight
const SPINNER: [&str; pyfix_app::state::SPINNER_FRAMES] =
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Runtime icon resolver
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn app(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{e73c}", // nf-dev-python
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn file(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15b}", // nf-fa-file
            IconMode::Unicode => "\u{25a4}",   // ▤
        }
    }

    pub fn globe(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0ac}", // nf-fa-globe
            IconMode::Unicode => "@",
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    /// Fixed icon per panel
    pub fn panel(&self, kind: PanelKind) -> &'static str {
        match (kind, self.mode) {
            (PanelKind::GettingStarted, _) => self.info(),
            (PanelKind::Checks, IconMode::NerdFonts) => "\u{f0ae}", // nf-fa-tasks
            (PanelKind::Checks, IconMode::Unicode) => "\u{2261}",   // ≡
            (PanelKind::Syntax, _) => self.check(),
            (PanelKind::Style, IconMode::NerdFonts) => "\u{f1fc}", // nf-fa-paint_brush
            (PanelKind::Style, IconMode::Unicode) => "\u{00b6}",   // ¶
            (PanelKind::OriginalTests, IconMode::NerdFonts)
            | (PanelKind::FixedTests, IconMode::NerdFonts) => "\u{f0c3}", // nf-fa-flask
            (PanelKind::OriginalTests, IconMode::Unicode)
            | (PanelKind::FixedTests, IconMode::Unicode) => "\u{2697}", // ⚗
            (PanelKind::Explanation, IconMode::NerdFonts) => "\u{f0eb}", // nf-fa-lightbulb
            (PanelKind::Explanation, IconMode::Unicode) => "\u{203b}", // ※
            (PanelKind::FixedCode, IconMode::NerdFonts) => "\u{f121}", // nf-fa-code
            (PanelKind::FixedCode, IconMode::Unicode) => "\u{00bb}", // »
        }
    }

    /// Spinner glyph for `frame` (wraps)
    pub fn spinner(&self, frame: usize) -> &'static str {
        SPINNER[frame % SPINNER.len()]
    }
}
