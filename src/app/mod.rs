//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete editor state
//! - [`Message`]: All possible user actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Blocking event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use input::message_for_event;
pub use model::Model;
pub use update::{Message, update};

use std::path::PathBuf;

use crate::editor::RenderOptions;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    render_options: RenderOptions,
}

impl App {
    /// Create an application for an optional file.
    ///
    /// With a path, the file is opened at startup and used as the save
    /// target. Without one the buffer starts empty and saving does nothing.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            render_options: RenderOptions::default(),
        }
    }

    /// Set the tab stop and width policy used to lay out rows.
    pub const fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }
}

#[cfg(test)]
mod tests;
