//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which rectangle of the buffer is on screen and
//! moves it so the cursor stays visible. Horizontal scrolling works in
//! display columns, so tabs and wide glyphs scroll correctly.

use std::ops::Range;

/// The visible window onto the buffer.
///
/// # Example
///
/// ```
/// use runed::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 24);
/// vp.scroll(30, 0);
/// assert_eq!(vp.row_offset(), 7);
/// assert_eq!(vp.visible_rows(), 7..31);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    row_offset: usize,
    col_offset: usize,
}

impl Viewport {
    /// Create a viewport of the text area size, scrolled to the origin.
    ///
    /// # Arguments
    ///
    /// * `width` - Text area width in columns
    /// * `height` - Text area height in rows (status bar excluded)
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// First buffer row shown on screen.
    pub const fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// First display column shown on screen.
    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Buffer rows covered by the screen. May run past the end of the buffer.
    pub const fn visible_rows(&self) -> Range<usize> {
        self.row_offset..self.row_offset + self.height as usize
    }

    /// Resize the viewport. Offsets are fixed up on the next [`Viewport::scroll`].
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Move the window so that `cursor_row` and `display_col` are visible.
    pub fn scroll(&mut self, cursor_row: usize, display_col: usize) {
        let height = usize::from(self.height.max(1));
        let width = usize::from(self.width.max(1));

        if cursor_row < self.row_offset {
            self.row_offset = cursor_row;
        }
        if cursor_row >= self.row_offset + height {
            self.row_offset = cursor_row + 1 - height;
        }

        if display_col < self.col_offset {
            self.col_offset = display_col;
        }
        if display_col >= self.col_offset + width {
            self.col_offset = display_col + 1 - width;
        }
    }

    /// First render cell to draw for a row `row_width` cells wide.
    ///
    /// The column offset is set by the cursor row and may be past the end
    /// of a shorter row; the slice then starts at its end.
    pub fn slice_start(&self, row_width: usize) -> usize {
        self.col_offset.min(row_width)
    }

    /// Cursor row for Page Up: the top of the window.
    pub const fn page_up_row(&self) -> usize {
        self.row_offset
    }

    /// Cursor row for Page Down: the bottom of the window.
    pub const fn page_down_row(&self) -> usize {
        self.row_offset + (self.height as usize).saturating_sub(1)
    }

    /// Screen position of the cursor relative to the text area.
    pub fn cursor_position(&self, cursor_row: usize, display_col: usize) -> (u16, u16) {
        let x = display_col.saturating_sub(self.col_offset);
        let y = cursor_row.saturating_sub(self.row_offset);
        (
            u16::try_from(x).unwrap_or(u16::MAX),
            u16::try_from(y).unwrap_or(u16::MAX),
        )
    }
}
