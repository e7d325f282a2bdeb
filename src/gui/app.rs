// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::{APP_TITLE, FOOTER},
        options::{AppOptions, DataOptions},
        state::AppState,
    },
    dataset::Dataset,
    session::Session,
};

use super::{actions::UiAction, components, logo::{self, HEADER_LOGO_SIZE}};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let opts = AppOptions {
        data: DataOptions::from_env(),
        ..AppOptions::default()
    };
    eframe::run_native(
        "UST Facility Lookup",
        options,
        Box::new(|cc| {
            let mut app = App::new(AppState::new(opts));
            app.logo = logo::load_texture(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,
    pub session: Session,
    pub logo: Option<egui::TextureHandle>,
}

impl App {
    /// Load the dataset named in `state.options.data`. A load failure leaves
    /// the app usable with an empty dataset and the error in the status line.
    pub fn new(mut state: AppState) -> Self {
        let dataset = match Dataset::load(&state.options.data) {
            Ok(ds) => {
                state.gui.status = format!(
                    "Loaded {} tank record(s), {} owner(s)",
                    ds.facilities.len(),
                    ds.owners.len()
                );
                ds
            }
            Err(e) => {
                loge!("Data: {}", e);
                state.gui.status = format!("Error: {e}");
                Dataset::default()
            }
        };

        logf!("Init: data={}", state.options.data.facilities.display());
        Self::with_dataset(state, dataset)
    }

    pub fn with_dataset(state: AppState, dataset: Dataset) -> Self {
        Self { state, session: Session::new(dataset), logo: None }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.state.gui.status = msg.into();
    }

    fn apply(&mut self, ctx: &egui::Context, action: UiAction) {
        super::actions::apply(self, ctx, action);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                if let Some(tex) = &self.logo {
                    let size = egui::vec2(HEADER_LOGO_SIZE, HEADER_LOGO_SIZE);
                    ui.add(egui::Image::new(egui::load::SizedTexture::new(tex.id(), size)));
                }
                ui.heading(APP_TITLE);
                ui.add_space(6.0);
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(FOOTER);
            });
        });

        let mut pending: Option<UiAction> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            components::category_bar::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            pending = components::results::draw(ui, &self.session);
        });

        if let Some(action) = pending {
            self.apply(ctx, action);
        }

        components::owner_modal::draw(ctx, &mut self.session);
        components::notice::draw(ctx, &mut self.session);
    }
}
