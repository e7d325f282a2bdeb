// src/gui/components/category_bar.rs
//
// Category selector plus whichever criterion control the category wants:
// a text box + Search button, or a dropdown of values found in the data.

use eframe::egui;
use crate::{
    filter::{Category, Mode},
    gui::app::App,
};

const SELECT: &str = "--Select--";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let before = app.session.category();
    let mut picked = before;

    ui.horizontal(|ui| {
        ui.label("Select Category:");
        egui::ComboBox::from_id_salt("category_selector")
            .selected_text(picked.map(Category::label).unwrap_or(SELECT))
            .width(200.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut picked, None, SELECT);
                for c in Category::ALL {
                    ui.selectable_value(&mut picked, Some(c), c.label());
                }
            });
    });

    if picked != before {
        app.session.set_category(picked);
    }

    ui.add_space(4.0);

    match app.session.mode() {
        Some(Mode::Search) => draw_search(ui, app),
        Some(Mode::Dropdown) => draw_dropdown(ui, app),
        None => {}
    }
}

fn draw_search(ui: &mut egui::Ui, app: &mut App) {
    let mut run = false;

    ui.horizontal(|ui| {
        ui.label("Enter Search Term:");
        let resp = ui.add(
            egui::TextEdit::singleline(app.session.search_term_mut())
                .desired_width(260.0),
        );
        // Enter in the box behaves like the button
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            run = true;
        }
        if ui.button("Search").clicked() {
            run = true;
        }
    });

    if run {
        app.session.search();
        let term = app.session.search_term().trim().to_string();
        after_query(app, &term);
    }
}

fn draw_dropdown(ui: &mut egui::Ui, app: &mut App) {
    let current = app.session.selected_value().map(str::to_owned);
    let mut picked: Option<String> = None;

    ui.horizontal(|ui| {
        ui.label("Select Value:");
        egui::ComboBox::from_id_salt(("value_selector", app.session.category()))
            .selected_text(current.as_deref().unwrap_or(SELECT))
            .width(320.0)
            .height(400.0)
            .show_ui(ui, |ui| {
                if ui.selectable_label(current.is_none(), SELECT).clicked() {
                    picked = Some(String::new());
                }
                for v in app.session.unique_values() {
                    let on = current.as_deref() == Some(v.as_str());
                    if ui.selectable_label(on, v).clicked() {
                        picked = Some(v.clone());
                    }
                }
            });
    });

    if let Some(value) = picked {
        app.session.select_value(&value);
        after_query(app, &value);
    }
}

fn after_query(app: &mut App, criterion: &str) {
    super::export_bar::follow_criterion(app, criterion);
    let n = app.session.result_indices().len();
    let facilities = app.session.groups().len();
    app.status(format!("{n} tank row(s) at {facilities} facility(ies)"));
}
