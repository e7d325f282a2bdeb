// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Views collect a `UiAction` while they hold borrows of the session and
// hand it back; `apply` runs it once those borrows are gone.

mod copy;
mod export;

pub use copy::copy;
pub use export::export;

use eframe::egui;
use crate::gui::app::App;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    /// "View Owner Info" on a tank column.
    ShowOwner(Option<String>),
    /// "View on Google Maps" on a facility block.
    OpenMap {
        latitude: Option<String>,
        longitude: Option<String>,
    },
}

pub fn apply(app: &mut App, ctx: &egui::Context, action: UiAction) {
    match action {
        UiAction::ShowOwner(name) => {
            app.session.show_owner(name.as_deref());
            if app.session.owner().is_none() {
                match name.as_deref().filter(|n| !n.is_empty()) {
                    Some(n) => app.status(format!("No owner record for {n:?}")),
                    None => app.status("No owner name on this tank"),
                }
            }
        }
        UiAction::OpenMap { latitude, longitude } => {
            if let Some(url) = app.session.open_map(latitude.as_deref(), longitude.as_deref()) {
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
        }
    }
}
