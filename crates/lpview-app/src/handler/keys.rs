//! Key bindings for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::Screen;
use crate::state::AppState;

/// Convert key events to messages based on the screen on top
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys
    match key {
        InputKey::CharCtrl('c') | InputKey::Char('q') => return Some(Message::Quit),
        InputKey::Char('r') => return Some(Message::Refresh),
        _ => {}
    }

    match state.current_screen() {
        Screen::Home => handle_key_home(key),
        Screen::Second => handle_key_second(key),
    }
}

fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::PageUp => Some(Message::SelectPreviousPad),
        InputKey::PageDown => Some(Message::SelectNextPad),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::Enter | InputKey::Right | InputKey::Char('l') => Some(Message::OpenSelected),
        _ => None,
    }
}

fn handle_key_second(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Left | InputKey::Char('h') => {
            Some(Message::Back)
        }
        _ => None,
    }
}
