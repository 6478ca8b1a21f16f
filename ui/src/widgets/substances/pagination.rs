//! Pagination footer.

use egui::{Align, Button, Frame, Layout, Margin, RichText, Ui};
use substances_business::PageView;

use crate::utils::colors::{FOOTER_BG, FOOTER_TEXT, HEADER_TEXT};

pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";

/// Navigation requested by the footer this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
}

/// Renders "Page X of Y" and the two navigation buttons.
///
/// Each button is disabled at its bound. The caller applies the returned action after
/// the page view borrow ends.
pub fn render_footer(ui: &mut Ui, view: &PageView<'_>) -> Option<PageAction> {
    let mut action = None;

    Frame::NONE
        .fill(FOOTER_BG)
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(view.indicator()).color(FOOTER_TEXT));

                // Right-to-left: `Next` is added first so that `Previous` sits on its left.
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let next = Button::new(RichText::new(NEXT_LABEL).color(HEADER_TEXT));
                    if ui.add_enabled(view.can_next, next).clicked() {
                        action = Some(PageAction::Next);
                    }

                    let previous = Button::new(RichText::new(PREVIOUS_LABEL).color(HEADER_TEXT));
                    if ui.add_enabled(view.can_previous, previous).clicked() {
                        action = Some(PageAction::Previous);
                    }
                });
            });
        });

    action
}
