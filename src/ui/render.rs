use ratatui::buffer::Buffer as ScreenBuffer;
use ratatui::prelude::*;

use crate::app::Model;
use crate::editor::Buffer;

use super::viewport::Viewport;
use super::{FILLER_MARKER, STATUS_BAR_HEIGHT, status};

/// Render the complete UI.
///
/// Scrolls the viewport to the cursor, draws the visible rows and the
/// status bar, then places the terminal cursor.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let text_area = Rect {
        height: area.height.saturating_sub(STATUS_BAR_HEIGHT),
        ..area
    };
    let status_area = Rect {
        y: area.y + text_area.height,
        height: area.height.min(STATUS_BAR_HEIGHT),
        ..area
    };

    model.viewport.resize(text_area.width, text_area.height);
    let cursor = model.buffer.cursor();
    let display_col = model.buffer.cursor_display_col();
    model.viewport.scroll(cursor.row, display_col);

    draw_rows(
        &mut model.buffer,
        &model.viewport,
        frame.buffer_mut(),
        text_area,
    );
    status::render_status_bar(model, frame, status_area);

    let (x, y) = model.viewport.cursor_position(cursor.row, display_col);
    frame.set_cursor_position(Position::new(
        text_area.x.saturating_add(x),
        text_area.y.saturating_add(y),
    ));
}

fn draw_rows(buffer: &mut Buffer, viewport: &Viewport, screen: &mut ScreenBuffer, area: Rect) {
    for (y, file_row) in (0..area.height).zip(viewport.visible_rows()) {
        let screen_y = area.y + y;
        let Ok(row_width) = buffer.row_display_width(file_row) else {
            if area.width > 0 {
                set_cell(screen, area.x, screen_y, FILLER_MARKER);
            }
            continue;
        };
        let start = viewport.slice_start(row_width);
        let policy = buffer.options().width();
        let Ok(cells) = buffer.render(file_row) else {
            continue;
        };
        for (x, &ch) in (0..area.width).zip(cells.get(start..).unwrap_or_default()) {
            // A wide glyph with no room for its second cell would wrap.
            let ch = if x + 1 >= area.width && policy.cells(ch) == 2 {
                ' '
            } else {
                ch
            };
            set_cell(screen, area.x + x, screen_y, ch);
        }
    }
}

fn set_cell(screen: &mut ScreenBuffer, x: u16, y: u16, ch: char) {
    if let Some(cell) = screen.cell_mut((x, y)) {
        cell.set_char(display_char(ch));
    }
}

/// Control characters would be interpreted by the terminal; show them as `?`.
fn display_char(ch: char) -> char {
    if ch.is_control() { '?' } else { ch }
}
