//! Error and loading panels.

use egui::{Frame, Margin, Response, RichText, Stroke, Ui};

use crate::utils::colors::{
    ERROR_BG, ERROR_BORDER, ERROR_HEADING as ERROR_HEADING_COLOR, ERROR_TEXT, LOADING_BG,
    LOADING_TEXT,
};

pub const ERROR_HEADING: &str = "Error Loading Data";

pub const LOADING_HEADING: &str = "Loading Substances...";

/// Red panel with a heading and the stored error message. No retry affordance.
pub fn error_panel(ui: &mut Ui, message: &str) -> Response {
    let response = Frame::NONE
        .fill(ERROR_BG)
        .inner_margin(Margin::same(16))
        .outer_margin(Margin::symmetric(0, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(RichText::new(ERROR_HEADING).strong().color(ERROR_HEADING_COLOR));
            ui.label(RichText::new(message).color(ERROR_TEXT));
        })
        .response;

    let rect = response.rect;
    ui.painter().vline(
        rect.left(),
        rect.top()..=rect.bottom(),
        Stroke::new(4.0, ERROR_BORDER),
    );

    response
}

pub fn loading_panel(ui: &mut Ui) -> Response {
    Frame::NONE
        .fill(LOADING_BG)
        .inner_margin(Margin::same(16))
        .outer_margin(Margin::symmetric(0, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.spinner();
                ui.heading(RichText::new(LOADING_HEADING).strong().color(LOADING_TEXT));
            });
        })
        .response
}

#[cfg(test)]
mod status_panel_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn error_panel_shows_heading_and_message() {
        let harness = Harness::new_ui(|ui| {
            super::error_panel(ui, "Network response was not ok");
        });

        assert!(harness.query_by_label(super::ERROR_HEADING).is_some());
        assert!(
            harness
                .query_by_label("Network response was not ok")
                .is_some()
        );
    }

    #[test]
    fn loading_panel_shows_heading() {
        let mut harness = Harness::new_ui(|ui| {
            super::loading_panel(ui);
        });
        harness.step();

        assert!(harness.query_by_label(super::LOADING_HEADING).is_some());
    }
}
