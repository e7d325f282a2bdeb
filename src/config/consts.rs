// src/config/consts.rs

// Dataset files
pub const DEFAULT_DATA_FILE: &str = "data/data.json";
pub const DEFAULT_OWNERS_FILE: &str = "data/owners_data.json";
pub const ENV_DATA_FILE: &str = "UST_DATA";
pub const ENV_OWNERS_FILE: &str = "UST_OWNERS";

// Display
pub const NOT_AVAILABLE: &str = "N/A";
pub const APP_TITLE: &str = "Shield Environmental Associates Convenient Store Information for Kentucky";
pub const FOOTER: &str = "Shield Environmental Associates, Inc. 2024";
pub const PLACEHOLDER: &str =
    "Please select a category and a value or enter a search term to display results.";

// Map links
pub const MAP_URL_BASE: &str = "https://www.google.com/maps";
pub const COORDS_UNAVAILABLE: &str =
    "Latitude and Longitude not available or not in the correct format for this site.";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "ust_lookup=debug";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "facilities";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
