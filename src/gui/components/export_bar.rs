// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::{consts::DEFAULT_FILE, options::ExportFormat},
    core::sanitize::sanitize_filename,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);

            // Reflect the new extension unless the user typed their own.
            if !app.state.gui.out_path_dirty && export.follows_format() {
                app.state.gui.out_path_text = export.out_path().to_string_lossy().into_owned();
                logd!("UI: out_path_text refreshed to match format");
            }
        }
    }

    // --- Output field + buttons ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });

    ui.label(format!("Status: {}", app.state.gui.status));
}

/// Name the default export file after the current search term or dropdown
/// value. Leaves a user-edited path alone.
pub fn follow_criterion(app: &mut App, criterion: &str) {
    if app.state.gui.out_path_dirty {
        return;
    }
    let export = &mut app.state.options.export;
    export.set_file_stem(&sanitize_filename(criterion, DEFAULT_FILE));
    app.state.gui.out_path_text = export.out_path().to_string_lossy().into_owned();
}
