//! Text model for the editor.
//!
//! A [`Buffer`] owns the rows of the open file and the edit cursor. Each
//! [`Row`] keeps its code points and caches the display layout derived from
//! them (tab expansion, wide-glyph padding, index-to-column map).

mod buffer;
mod row;

pub use buffer::{Buffer, BufferError, Cursor, Direction};
pub use row::{DEFAULT_TAB_STOP, RenderOptions, Row, RowLayout, WidthPolicy};
