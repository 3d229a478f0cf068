use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

/// Text of the status bar: cursor row, row count, file name, state.
pub fn status_text(model: &Model) -> String {
    let filename = model.file_path.as_ref().map_or_else(
        || "[No Name]".to_string(),
        |p| {
            p.file_name()
                .map_or_else(|| p.display().to_string(), |s| s.to_string_lossy().to_string())
        },
    );
    let modified = if model.buffer.is_modified() {
        " [+]"
    } else {
        ""
    };
    let message = model
        .status_message
        .as_deref()
        .map_or_else(String::new, |m| format!("  {m}"));

    format!(
        "{}/{}  {filename}{modified}{message}",
        model.buffer.cursor().row + 1,
        model.buffer.row_count()
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status_bar = Paragraph::new(status_text(model))
        .style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(status_bar, area);
}
