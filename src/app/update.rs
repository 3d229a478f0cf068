use crate::app::Model;
use crate::editor::Direction;

/// All possible user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Move the cursor one step
    MoveCursor(Direction),
    /// Move the cursor to the top row of the window
    PageUp,
    /// Move the cursor to the bottom row of the window
    PageDown,
    /// Move to the start of the row
    Home,
    /// Move to the end of the row
    End,

    // Editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete the character before the cursor, joining rows at column 0
    DeleteBack,
    /// Split the row at the cursor
    SplitLine,

    // Application
    /// Write the buffer to its file
    Save,
    /// Exit immediately, without prompting for unsaved changes
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// Saving touches the filesystem and is handled as a side effect by the
/// event loop; here it is a no-op.
pub fn update(mut model: Model, msg: Message) -> Model {
    model.status_message = None;

    match msg {
        Message::MoveCursor(dir) => model.buffer.move_cursor(dir),
        Message::PageUp => {
            let row = model.viewport.page_up_row();
            model.buffer.move_to_row(row);
        }
        Message::PageDown => {
            let row = model.viewport.page_down_row();
            model.buffer.move_to_row(row);
        }
        Message::Home => model.buffer.move_home(),
        Message::End => model.buffer.move_end(),
        Message::InsertChar(ch) => model.buffer.insert_char(ch),
        Message::DeleteBack => {
            model.buffer.delete_back();
        }
        Message::SplitLine => model.buffer.split_line(),
        Message::Save => {}
        Message::Quit => model.should_quit = true,
    }

    model
}
