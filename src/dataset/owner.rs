// src/dataset/owner.rs
use serde::{Deserialize, Serialize};

use super::scalar::text;

/// Contact details for one tank owner. `name` is the join key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OwnerRecord {
    #[serde(rename = "OWNER_NAME", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "OWNER_ADDR1", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub addr1: Option<String>,
    #[serde(rename = "OWNER_CITY", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "OWNER_STATE", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "OWNER_ZIP", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(rename = "OWNER_PHONE", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl OwnerRecord {
    /// (label, value) pairs in overlay order, "N/A" filled in.
    /// The name is shown as-is, the way the overlay always has.
    pub fn detail_lines(&self) -> [(&'static str, &str); 6] {
        use crate::core::sanitize::or_na;
        [
            ("Name", self.name.as_deref().unwrap_or_default()),
            ("Address 1", or_na(self.addr1.as_deref())),
            ("City", or_na(self.city.as_deref())),
            ("State", or_na(self.state.as_deref())),
            ("Zip", or_na(self.zip.as_deref())),
            ("Phone", or_na(self.phone.as_deref())),
        ]
    }
}
