// src/gui/components/facility_card.rs
//
// One facility: name, address, county, map button, then the tank table
// (a row per tank field, a column per tank, owner row last).

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    core::sanitize::or_na,
    dataset::{FacilityTankRecord, Field, TANK_TABLE_FIELDS, field_or_default},
    group::FacilityGroup,
    gui::actions::UiAction,
};

const ROW_H: f32 = 18.0;
const OWNER_ROW_H: f32 = 24.0;

pub fn draw(ui: &mut egui::Ui, ix: usize, group: &FacilityGroup<'_>) -> Option<UiAction> {
    let mut action = None;
    let f = group.facility;

    egui::Frame::group(ui.style())
        .inner_margin(10.0)
        .corner_radius(8.0)
        .show(ui, |ui| {
            // The name heading shows the raw value, blank stays blank.
            ui.heading(f.get(Field::AiName).unwrap_or_default());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Address:").strong());
                ui.label(address_line(f));
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("County:").strong());
                ui.label(field_or_default(f, Field::County));
            });

            if ui.button("View on Google Maps").clicked() {
                action = Some(UiAction::OpenMap {
                    latitude: f.get(Field::Latitude).map(String::from),
                    longitude: f.get(Field::Longitude).map(String::from),
                });
            }

            ui.add_space(6.0);

            if let Some(a) = tank_table(ui, ix, &group.tanks) {
                action = Some(a);
            }
        });

    action
}

/// "ADDRESS_1, CITY, STATE ZIP", each part "N/A" when missing.
pub fn address_line(f: &FacilityTankRecord) -> String {
    format!(
        "{}, {}, {} {}",
        field_or_default(f, Field::Address1),
        field_or_default(f, Field::City),
        field_or_default(f, Field::State),
        field_or_default(f, Field::Zip),
    )
}

fn tank_table(ui: &mut egui::Ui, ix: usize, tanks: &[&FacilityTankRecord]) -> Option<UiAction> {
    let mut action = None;

    TableBuilder::new(ui)
        .id_salt(("tank_table", ix))
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(230.0))
        .columns(Column::auto().at_least(140.0).resizable(true), tanks.len())
        .body(|mut body| {
            for field in TANK_TABLE_FIELDS {
                body.row(ROW_H, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(field.label()).strong());
                    });
                    for tank in tanks {
                        row.col(|ui| {
                            ui.label(field_or_default(tank, field));
                        });
                    }
                });
            }

            body.row(OWNER_ROW_H, |mut row| {
                row.col(|ui| {
                    ui.label(RichText::new("Owner Name").strong());
                });
                for tank in tanks {
                    let owner = tank.get(Field::OwnerName);
                    row.col(|ui| {
                        ui.label(or_na(owner));
                        if ui.small_button("View Owner Info").clicked() {
                            action = Some(UiAction::ShowOwner(owner.map(String::from)));
                        }
                    });
                }
            });
        });

    action
}
