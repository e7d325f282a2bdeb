// src/gui/components/notice.rs
// Blocking notice (coordinates unavailable). OK or Esc dismisses it.
use eframe::egui;
use crate::session::Session;

pub fn draw(ctx: &egui::Context, session: &mut Session) {
    let Some(msg) = session.notice() else { return };

    let mut ok = false;
    let resp = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(msg);
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                ok = true;
            }
        });
    });

    if ok || resp.should_close() {
        session.dismiss_notice();
    }
}
