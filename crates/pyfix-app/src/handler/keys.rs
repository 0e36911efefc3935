//! Key event handlers for each UI mode

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Lines moved by PageUp/PageDown
const PAGE_SCROLL: u16 = 10;

/// Convert a key into a message for the current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::PathInput => handle_key_path_input(key),
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // File selection
        InputKey::Char('o') | InputKey::Char('/') => Some(Message::OpenPathInput),

        // Ignored while disabled
        InputKey::Enter | InputKey::Char('a') => state.can_analyze().then_some(Message::Analyze),

        // Results view
        InputKey::Tab => Some(Message::FocusNextPanel),
        InputKey::BackTab => Some(Message::FocusPrevPanel),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollPanelDown(1)),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollPanelUp(1)),
        InputKey::PageDown => Some(Message::ScrollPanelDown(PAGE_SCROLL)),
        InputKey::PageUp => Some(Message::ScrollPanelUp(PAGE_SCROLL)),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollPanelTop),
        InputKey::Char('z') => Some(Message::ToggleZoom),

        _ => None,
    }
}

fn handle_key_path_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('u') => Some(Message::PathInputClear),
        InputKey::Char(c) => Some(Message::PathInputChar(c)),
        InputKey::Backspace => Some(Message::PathInputBackspace),
        InputKey::Enter => Some(Message::PathInputSubmit),
        InputKey::Esc => Some(Message::PathInputCancel),
        _ => None,
    }
}
