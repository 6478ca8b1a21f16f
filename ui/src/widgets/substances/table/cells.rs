//! Cell rendering for the substances table.

use egui::{Frame, InnerResponse, Margin, RichText, Ui};
use substances_business::display_cell;

use crate::utils::colors::{CELL_TEXT, HEADER_BG, HEADER_TEXT};

#[inline]
fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG)
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, add_contents)
}

#[inline]
fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, add_contents)
}

/// Renders a header label verbatim.
#[inline]
pub fn render_header_cell(ui: &mut Ui, label: &str) {
    header_cell(ui, |ui| {
        ui.label(RichText::new(label).small().strong().color(HEADER_TEXT));
    });
}

/// Renders a body cell, with empty values shown as the placeholder.
#[inline]
pub fn render_data_cell(ui: &mut Ui, value: &str) {
    data_cell(ui, |ui| {
        ui.label(RichText::new(display_cell(value)).color(CELL_TEXT));
    });
}
