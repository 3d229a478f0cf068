use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Message;
use crate::editor::Direction;

/// Translate a terminal event into a message. Unbound events map to `None`.
pub fn message_for_event(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => message_for_key(*key),
        _ => None,
    }
}

fn message_for_key(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('s') => Some(Message::Save),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
        KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::Home => Some(Message::Home),
        KeyCode::End => Some(Message::End),
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Enter => Some(Message::SplitLine),
        KeyCode::Tab => Some(Message::InsertChar('\t')),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Message::InsertChar(c))
        }
        _ => None,
    }
}
