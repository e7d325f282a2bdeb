// src/gui/components/owner_modal.rs
use eframe::egui::{self, RichText};
use crate::session::Session;

pub fn draw(ctx: &egui::Context, session: &mut Session) {
    let Some(owner) = session.owner() else { return };

    let mut close = false;
    let resp = egui::Modal::new(egui::Id::new("owner_modal")).show(ctx, |ui| {
        ui.set_min_width(320.0);
        ui.heading("Owner Information");
        ui.add_space(6.0);
        for (label, value) in owner.detail_lines() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{label}:")).strong());
                ui.label(value);
            });
        }
        ui.add_space(10.0);
        if ui.button("Close").clicked() {
            close = true;
        }
    });

    if close || resp.should_close() {
        session.close_owner();
    }
}
