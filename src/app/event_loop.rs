use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, message_for_event, update};
use crate::editor::Buffer;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the terminal cannot
    /// be initialised, or a save or terminal I/O operation fails.
    pub fn run(&mut self) -> Result<()> {
        // Load before taking over the terminal so a bad path is reported cleanly.
        let mut buffer = Buffer::new(self.render_options);
        if let Some(path) = &self.file_path {
            buffer
                .open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
        }
        let mut model = Model::new(buffer, self.file_path.clone());

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - runed requires an interactive terminal")?;
        let result = Self::event_loop(&mut terminal, &mut model);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(model, frame))?;

            let Some(msg) = message_for_event(&event::read()?) else {
                continue;
            };
            tracing::trace!(?msg, "dispatch");
            *model = update(std::mem::take(model), msg);
            Self::handle_message_side_effects(model, msg)?;

            if model.should_quit {
                return Ok(());
            }
        }
    }
}
