// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::BufferError)
    clippy::module_name_repetitions
)]

//! # runed
//!
//! A minimal terminal text editor.
//!
//! The interesting part is the text model: every row keeps its code points
//! and a lazily rebuilt display layout, so the cursor lines up with tab
//! stops and double-width glyphs.
//!
//! ## Architecture
//!
//! runed uses The Elm Architecture (TEA) pattern:
//! - **Model**: Buffer, viewport and file target
//! - **Message**: Key-driven actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Rows, buffer and cursor
//! - [`ui`]: Viewport scrolling and drawing
//! - [`config`]: Saved defaults and flag parsing

pub mod app;
pub mod config;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Buffer, Cursor, Direction, RenderOptions, Row, WidthPolicy};
    pub use crate::ui::viewport::Viewport;
}
