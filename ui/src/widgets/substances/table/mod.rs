//! Table components for the substances viewer.
//!
//! - `columns`: Grid sizing
//! - `header`: Header row rendering
//! - `row`: Body row rendering
//! - `cells`: Header and data cell frames

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Frame, Grid, Response, ScrollArea, Stroke, Ui};
use substances_business::PageView;

use crate::utils::colors::TABLE_BORDER;
use columns::{CELL_SPACING, MIN_COLUMN_WIDTH};
use header::render_table_header;
use row::render_table_row;

/// Renders the header row followed by the rows of the current page.
pub fn render_table(ui: &mut Ui, view: &PageView<'_>) -> Response {
    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER))
        .show(ui, |ui| {
            ScrollArea::horizontal()
                .id_salt("substances_table_scroll")
                .show(ui, |ui| {
                    Grid::new("substances_table")
                        .num_columns(view.headers.len())
                        .min_col_width(MIN_COLUMN_WIDTH)
                        .spacing(CELL_SPACING)
                        .striped(true)
                        .show(ui, |ui| {
                            render_table_header(ui, view.headers);
                            for row in view.rows {
                                render_table_row(ui, row);
                            }
                        });
                });
        })
        .response
}
