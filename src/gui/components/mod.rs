// src/gui/components/mod.rs
pub mod category_bar;
pub mod export_bar;
pub mod facility_card;
pub mod notice;
pub mod owner_modal;
pub mod results;
