// src/gui/logo.rs
//
// The bundled shield: window icon (bin) and header image (app).

use eframe::egui;

const SHIELD_PNG: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/shield.png"));

pub const HEADER_LOGO_SIZE: f32 = 56.0;

/// RGBA8 pixels plus (width, height).
pub fn shield_rgba() -> Option<(Vec<u8>, u32, u32)> {
    let rgba = image::load_from_memory(SHIELD_PNG).ok()?.to_rgba8();
    let (w, h) = rgba.dimensions();
    Some((rgba.into_raw(), w, h))
}

pub fn shield_image() -> Option<egui::ColorImage> {
    let (rgba, w, h) = shield_rgba()?;
    Some(egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba))
}

/// Upload once; `None` leaves the header text-only.
pub fn load_texture(ctx: &egui::Context) -> Option<egui::TextureHandle> {
    let img = shield_image();
    if img.is_none() {
        logd!("UI: shield logo could not be decoded");
    }
    img.map(|img| ctx.load_texture("shield_logo", img, egui::TextureOptions::LINEAR))
}
