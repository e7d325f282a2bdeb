// src/gui/actions/copy.rs
use eframe::egui;
use crate::{config::options::ExportFormat, csv, gui::app::App};

/// Current results as TSV (pastes cleanly into spreadsheets).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if !app.session.has_results() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let (txt, tanks) = {
        let groups = app.session.groups();
        let tanks: usize = groups.iter().map(|g| g.tanks.len()).sum();
        logf!("Copy: facilities={}, tanks={}", groups.len(), tanks);
        (csv::to_export_string(&groups, ExportFormat::Tsv.delim()), tanks)
    };

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {tanks} tank row(s) to clipboard"));
}
