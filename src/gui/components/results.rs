// src/gui/components/results.rs
//
// Results area: one block per facility, or the placeholder when empty.
// Pure view over the session; button clicks come back as a `UiAction`.

use eframe::egui;
use crate::{gui::actions::UiAction, session::Session};
use super::facility_card;

pub fn draw(ui: &mut egui::Ui, session: &Session) -> Option<UiAction> {
    if !session.has_results() {
        ui.add_space(8.0);
        ui.label(session.placeholder());
        return None;
    }

    // Scroll bars reserve space instead of floating over the tables
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut action = None;

    egui::ScrollArea::both()
        .id_salt("results_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (ix, group) in session.groups().iter().enumerate() {
                if let Some(a) = facility_card::draw(ui, ix, group) {
                    action = Some(a);
                }
                ui.add_space(12.0);
            }
        });

    action
}
