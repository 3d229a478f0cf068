//! Terminal UI components.
//!
//! This module contains all UI-related code:
//! - [`viewport`]: Scroll offsets and the visible window
//! - `render`: Drawing buffer rows and placing the cursor
//! - `status`: The one-line status bar

pub mod viewport;

mod render;
mod status;

pub use render::render;

/// Drawn in the first column of screen rows past the end of the buffer.
pub const FILLER_MARKER: char = '~';

/// Rows reserved below the text area for the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;
