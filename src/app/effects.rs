use anyhow::{Context, Result};

use crate::app::{App, Message, Model};

impl App {
    /// Run the side effects of a message after [`crate::app::update`].
    ///
    /// A failed save is fatal: the error ends the event loop.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: Message) -> Result<()> {
        match msg {
            Message::Save => Self::save(model),
            Message::Quit => {
                tracing::info!("quit requested");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn save(model: &mut Model) -> Result<()> {
        let Some(path) = model.file_path.clone() else {
            model.status_message = Some("No file name; nothing saved".to_string());
            return Ok(());
        };
        let bytes = model
            .buffer
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        model.status_message = Some(format!(
            "Wrote {} rows, {bytes} bytes",
            model.buffer.row_count()
        ));
        Ok(())
    }
}
