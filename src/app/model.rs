use std::path::PathBuf;

use crate::editor::Buffer;
use crate::ui::viewport::Viewport;

/// The complete editor state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Default)]
pub struct Model {
    /// Rows and cursor.
    pub buffer: Buffer,
    /// Scroll offsets; sized from the terminal on every render.
    pub viewport: Viewport,
    /// Save target, if the editor was started with a file.
    pub file_path: Option<PathBuf>,
    /// One-shot message shown in the status bar until the next input.
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl Model {
    /// Create a model around a loaded buffer.
    pub fn new(buffer: Buffer, file_path: Option<PathBuf>) -> Self {
        Self {
            buffer,
            file_path,
            ..Self::default()
        }
    }

    /// Set the viewport size, e.g. before the first frame is drawn.
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }
}
