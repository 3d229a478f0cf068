use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::row::{RenderOptions, Row};

/// Errors raised by buffer operations.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Row index past the end of the buffer. Callers draw a filler instead.
    #[error("row {index} is out of range (buffer has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

/// Cursor position in the editor buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column, counted in code points.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The document as a list of rows, plus the edit cursor.
///
/// There is always at least one row, and the cursor always points at a
/// valid row with a column in `0..=row.len()`. Operations that would break
/// this clamp or do nothing rather than fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    rows: Vec<Row>,
    cursor: Cursor,
    options: RenderOptions,
    modified: bool,
}

impl Buffer {
    /// Create a buffer holding one empty row.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            rows: vec![Row::default()],
            cursor: Cursor::default(),
            options,
            modified: false,
        }
    }

    /// Create a buffer from a string, splitting rows on `\n`.
    ///
    /// A trailing newline does not produce an extra empty row; an empty
    /// string produces a single empty row.
    pub fn from_text(text: &str) -> Self {
        Self {
            rows: split_rows(text),
            ..Self::default()
        }
    }

    /// Replace the buffer content with the file at `path`.
    ///
    /// On failure the buffer is left exactly as it was.
    pub fn open(&mut self, path: &Path) -> Result<(), BufferError> {
        let bytes = fs::read(path).map_err(|source| BufferError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        self.rows = split_rows(&text);
        self.cursor = Cursor::default();
        self.modified = false;
        tracing::info!(path = %path.display(), rows = self.rows.len(), "opened file");
        Ok(())
    }

    /// Write the buffer to `path`, returning the number of bytes written.
    pub fn save(&mut self, path: &Path) -> Result<usize, BufferError> {
        let text = self.text();
        fs::write(path, &text).map_err(|source| BufferError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.modified = false;
        tracing::debug!(path = %path.display(), bytes = text.len(), "saved file");
        Ok(text.len())
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn options(&self) -> RenderOptions {
        self.options
    }

    /// Whether the buffer changed since it was opened or last saved.
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Number of rows; never zero.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of a row in code points, or `None` past the end.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Row::len)
    }

    /// Text of a row, or `None` past the end.
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.rows.get(row).map(|r| r.text().iter().collect())
    }

    /// Display cells for a row, recomputing its layout if needed.
    pub fn render(&mut self, row: usize) -> Result<&[char], BufferError> {
        let options = self.options;
        Ok(self.row_mut(row)?.layout(options).cells())
    }

    /// Total display width of a row.
    pub fn row_display_width(&mut self, row: usize) -> Result<usize, BufferError> {
        let options = self.options;
        Ok(self.row_mut(row)?.layout(options).width())
    }

    /// Display column of the cursor, after tab and wide-glyph expansion.
    pub fn cursor_display_col(&mut self) -> usize {
        let Cursor { row, col } = self.cursor;
        let options = self.options;
        self.rows[row]
            .layout(options)
            .column_of(col)
            .unwrap_or_default()
    }

    /// The whole buffer as text; every row ends with `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.extend(row.text());
            out.push('\n');
        }
        out
    }

    /// Insert a character at the cursor and move past it.
    pub fn insert_char(&mut self, ch: char) {
        let Cursor { row, col } = self.cursor;
        self.rows[row].insert_char(col, ch);
        self.cursor.col += 1;
        self.modified = true;
    }

    /// Split the current row at the cursor (Enter key).
    pub fn split_line(&mut self) {
        let Cursor { row, col } = self.cursor;
        let right = self.rows[row].split_off(col);
        self.rows.insert(row + 1, right);
        self.cursor = Cursor::at(row + 1, 0);
        self.modified = true;
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// At the start of a row this joins the row onto the previous one.
    /// Returns `true` if anything changed.
    pub fn delete_back(&mut self) -> bool {
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            self.rows[row].delete_before(col);
            self.cursor.col -= 1;
        } else if row > 0 {
            let current = self.rows.remove(row);
            let prev = &mut self.rows[row - 1];
            let join_col = prev.len();
            prev.append(current);
            self.cursor = Cursor::at(row - 1, join_col);
        } else {
            return false;
        }
        self.modified = true;
        true
    }

    /// Move the cursor in the given direction.
    ///
    /// Vertical moves do not remember a preferred column: the column is
    /// clamped to the destination row and stays there.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                self.cursor.row = self.cursor.row.saturating_sub(1);
            }
            Direction::Down => {
                if self.cursor.row + 1 < self.rows.len() {
                    self.cursor.row += 1;
                }
            }
            Direction::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                } else if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                    self.cursor.col = self.current_row_len();
                }
            }
            Direction::Right => {
                if self.cursor.col < self.current_row_len() {
                    self.cursor.col += 1;
                } else if self.cursor.row + 1 < self.rows.len() {
                    self.cursor = Cursor::at(self.cursor.row + 1, 0);
                }
            }
        }
        self.clamp_col();
    }

    /// Jump to a row (page up/down), clamped to the buffer.
    pub fn move_to_row(&mut self, row: usize) {
        self.cursor.row = row.min(self.rows.len() - 1);
        self.clamp_col();
    }

    /// Move cursor to the beginning of the row (Home).
    pub const fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    /// Move cursor to the end of the row (End).
    pub fn move_end(&mut self) {
        self.cursor.col = self.current_row_len();
    }

    /// Move cursor to a specific row and column, clamping both.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor.row = row.min(self.rows.len() - 1);
        self.cursor.col = col;
        self.clamp_col();
    }

    // --- Private helpers ---

    fn row_mut(&mut self, row: usize) -> Result<&mut Row, BufferError> {
        let len = self.rows.len();
        self.rows
            .get_mut(row)
            .ok_or(BufferError::RowOutOfRange { index: row, len })
    }

    fn current_row_len(&self) -> usize {
        self.rows[self.cursor.row].len()
    }

    fn clamp_col(&mut self) {
        self.cursor.col = self.cursor.col.min(self.current_row_len());
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Split on `\n`, dropping one trailing newline. Always yields at least one row.
fn split_rows(text: &str) -> Vec<Row> {
    text.strip_suffix('\n')
        .unwrap_or(text)
        .split('\n')
        .map(Row::from)
        .collect()
}
