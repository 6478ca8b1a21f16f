//! Top-level viewer panel.
//!
//! Mounts the loader on the first frame, then renders exactly one of the error, loading
//! or loaded states.

use egui::{Color32, Frame, Margin, Response, RichText, Ui};

use super::pagination::{PageAction, render_footer};
use super::status::{error_panel, loading_panel};
use super::table::render_table;
use crate::state::State;
use crate::utils::colors::TITLE_BG;

pub fn substances_viewer(state: &mut State, ui: &mut Ui) -> Response {
    state.mount(ui.ctx());
    state.sync();

    if let Some(message) = state.viewer.error_message() {
        return error_panel(ui, message);
    }

    // Collected here and applied once the page view borrow ends.
    let mut action = None;

    let response = match state.viewer.page_view() {
        None => return loading_panel(ui),
        Some(view) => {
            ui.vertical(|ui| {
                Frame::NONE
                    .fill(TITLE_BG)
                    .inner_margin(Margin::same(16))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.heading(RichText::new(view.title).strong().color(Color32::WHITE));
                    });

                render_table(ui, &view);
                action = render_footer(ui, &view);
            })
            .response
        }
    };

    match action {
        Some(PageAction::Next) => state.viewer.next_page(),
        Some(PageAction::Previous) => state.viewer.previous_page(),
        None => return response,
    }
    ui.ctx().request_repaint();

    response
}
