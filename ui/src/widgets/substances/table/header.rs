//! Table header rendering for the substances table.

use egui::Ui;

use super::cells::render_header_cell;

/// Renders one header cell per column, then ends the grid row.
#[inline]
pub fn render_table_header(ui: &mut Ui, headers: &[String]) {
    for label in headers {
        render_header_cell(ui, label);
    }
    ui.end_row();
}
