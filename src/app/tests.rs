use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tempfile::tempdir;

use crate::editor::{Buffer, Cursor, Direction};

use super::{App, Message, Model, message_for_event, update};

fn create_test_model(text: &str) -> Model {
    Model::new(Buffer::from_text(text), Some(PathBuf::from("test.txt"))).with_size(80, 10)
}

fn create_long_test_model() -> Model {
    let text = (1..=50)
        .map(|i| format!("Line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    create_test_model(&text)
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn rows_of(model: &Model) -> Vec<String> {
    (0..model.buffer.row_count())
        .map(|i| model.buffer.row_text(i).unwrap_or_default())
        .collect()
}

// --- Key mapping ---

#[test]
fn test_ctrl_q_quits_and_ctrl_s_saves() {
    assert_eq!(
        message_for_event(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
        Some(Message::Quit)
    );
    assert_eq!(
        message_for_event(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
        Some(Message::Save)
    );
}

#[test]
fn test_unbound_ctrl_chord_is_ignored() {
    assert_eq!(
        message_for_event(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
        None
    );
}

#[test]
fn test_navigation_keys() {
    let cases = [
        (KeyCode::Up, Message::MoveCursor(Direction::Up)),
        (KeyCode::Down, Message::MoveCursor(Direction::Down)),
        (KeyCode::Left, Message::MoveCursor(Direction::Left)),
        (KeyCode::Right, Message::MoveCursor(Direction::Right)),
        (KeyCode::PageUp, Message::PageUp),
        (KeyCode::PageDown, Message::PageDown),
        (KeyCode::Home, Message::Home),
        (KeyCode::End, Message::End),
        (KeyCode::Backspace, Message::DeleteBack),
        (KeyCode::Enter, Message::SplitLine),
    ];
    for (code, expected) in cases {
        assert_eq!(
            message_for_event(&key(code, KeyModifiers::NONE)),
            Some(expected),
            "{code:?}"
        );
    }
}

#[test]
fn test_printable_keys_insert_themselves() {
    assert_eq!(
        message_for_event(&key(KeyCode::Char('a'), KeyModifiers::NONE)),
        Some(Message::InsertChar('a'))
    );
    assert_eq!(
        message_for_event(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
        Some(Message::InsertChar('A'))
    );
    assert_eq!(
        message_for_event(&key(KeyCode::Char('日'), KeyModifiers::NONE)),
        Some(Message::InsertChar('日'))
    );
    assert_eq!(
        message_for_event(&key(KeyCode::Tab, KeyModifiers::NONE)),
        Some(Message::InsertChar('\t'))
    );
}

#[test]
fn test_key_release_is_ignored() {
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert_eq!(message_for_event(&release), None);
}

#[test]
fn test_resize_event_has_no_message() {
    assert_eq!(message_for_event(&Event::Resize(100, 40)), None);
}

// --- Update ---

#[test]
fn test_typing_inserts_text() {
    let mut model = create_test_model("");
    for ch in "hi".chars() {
        model = update(model, Message::InsertChar(ch));
    }
    assert_eq!(rows_of(&model), vec!["hi"]);
    assert!(model.buffer.is_modified());
}

#[test]
fn test_enter_and_backspace_round_trip() {
    let mut model = create_test_model("hello");
    model.buffer.move_to(0, 2);
    let model = update(model, Message::SplitLine);
    assert_eq!(rows_of(&model), vec!["he", "llo"]);
    let model = update(model, Message::DeleteBack);
    assert_eq!(rows_of(&model), vec!["hello"]);
    assert_eq!(model.buffer.cursor(), Cursor::at(0, 2));
}

#[test]
fn test_page_down_moves_to_bottom_of_window() {
    let model = create_long_test_model();
    let model = update(model, Message::PageDown);
    assert_eq!(model.buffer.cursor().row, 9);
}

#[test]
fn test_page_up_moves_to_top_of_window() {
    let mut model = create_long_test_model();
    model.buffer.move_to(30, 0);
    model.viewport.scroll(30, 0);
    let model = update(model, Message::PageUp);
    assert_eq!(model.buffer.cursor().row, 21);
}

#[test]
fn test_page_down_clamps_to_last_row() {
    let model = create_test_model("a\nb\nc");
    let model = update(model, Message::PageDown);
    assert_eq!(model.buffer.cursor().row, 2);
}

#[test]
fn test_home_and_end() {
    let model = create_test_model("hello");
    let model = update(model, Message::End);
    assert_eq!(model.buffer.cursor(), Cursor::at(0, 5));
    let model = update(model, Message::Home);
    assert_eq!(model.buffer.cursor(), Cursor::at(0, 0));
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model("x"), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_any_message_clears_status_message() {
    let mut model = create_test_model("x");
    model.status_message = Some("Wrote 1 rows".to_string());
    let model = update(model, Message::MoveCursor(Direction::Right));
    assert_eq!(model.status_message, None);
}

// --- Save side effect ---

#[test]
fn test_save_writes_file_with_trailing_newline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut model = Model::new(Buffer::from_text("a\tb\nc"), Some(path.clone()));
    model.buffer.insert_char('>');

    App::handle_message_side_effects(&mut model, Message::Save).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), ">a\tb\nc\n");
    assert!(!model.buffer.is_modified());
    assert!(
        model
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("7 bytes"))
    );
}

#[test]
fn test_save_without_file_is_noop() {
    let mut model = Model::new(Buffer::from_text("text"), None);
    model.buffer.insert_char('x');
    App::handle_message_side_effects(&mut model, Message::Save).unwrap();
    assert!(model.buffer.is_modified());
    assert!(model.status_message.is_some());
}

#[test]
fn test_save_failure_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    let mut model = Model::new(Buffer::from_text("text"), Some(path));
    let err = App::handle_message_side_effects(&mut model, Message::Save).unwrap_err();
    assert!(err.to_string().contains("Failed to save"));
}
