//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn code() -> Style {
    Style::default().fg(palette::CODE_FG)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Action control ---

/// Enabled action control: black on cyan
pub fn button_enabled() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Disabled action control: dimmed, no background
pub fn button_disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::DIM)
}

// --- Badges ---

/// PASSED/FAILED badge: `(label, style)`
pub fn test_badge(passed: bool) -> (&'static str, Style) {
    let color = if passed {
        palette::STATUS_GREEN
    } else {
        palette::STATUS_RED
    };
    let label = if passed { "PASSED" } else { "FAILED" };
    (
        label,
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}

// --- Error banner ---
pub fn banner() -> Style {
    Style::default()
        .fg(palette::BANNER_FG)
        .bg(palette::BANNER_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_button_styles_differ() {
        assert_eq!(button_enabled().bg, Some(palette::ACCENT));
        assert_eq!(button_disabled().bg, None);
        assert_eq!(button_disabled().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_badges() {
        let (label, style) = test_badge(true);
        assert_eq!(label, "PASSED");
        assert_eq!(style.bg, Some(palette::STATUS_GREEN));

        let (label, style) = test_badge(false);
        assert_eq!(label, "FAILED");
        assert_eq!(style.bg, Some(palette::STATUS_RED));
    }
}
