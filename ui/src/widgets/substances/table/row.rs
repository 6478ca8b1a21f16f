//! Row rendering for the substances table.

use egui::Ui;

use super::cells::render_data_cell;

#[inline]
pub fn render_table_row(ui: &mut Ui, row: &[String]) {
    for value in row {
        render_data_cell(ui, value);
    }
    ui.end_row();
}
