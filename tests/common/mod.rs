// tests/common/mod.rs
//
// Small in-memory dataset shared by the integration tests.
#![allow(dead_code)]

use ust_lookup::Dataset;

pub const FACILITIES: &str = r#"[
  {"AI_ID": 100, "AI_NAME": "Corner Market #12", "ADDRESS_1": "112 Main St",
   "MAILING_ADDRESS_CITY": "Lexington", "MAILING_ADDRESS_STATE": "KY", "MAILING_ADDRESS_ZIP": "40507",
   "COUNTY": "Fayette", "OWNER_NAME": "Bluegrass Fuel Co", "LATITUDE": 38.0, "LONGITUDE": -84.0,
   "SUBJECT_ITEM_ID": 1, "TANK_SUBSTANCE_CODE": "UNL", "CAPACITY_MSR": 10000},
  {"AI_ID": 200, "AI_NAME": "Riverside Quick Stop", "ADDRESS_1": "8 River Rd",
   "COUNTY": "Franklin", "OWNER_NAME": "Capital Petroleum LLC", "LATITUDE": "abc", "LONGITUDE": "-84.8",
   "SUBJECT_ITEM_ID": 2, "TANK_SUBSTANCE_CODE": "DSL"},
  {"AI_ID": "100", "AI_NAME": "Corner Market #12", "ADDRESS_1": "112 Main St",
   "COUNTY": "Fayette", "OWNER_NAME": "bluegrass fuel co",
   "SUBJECT_ITEM_ID": 3, "TANK_SUBSTANCE_CODE": "DSL", "REMOVAL_DATE": null},
  {"AI_ID": 300, "AI_NAME": "Hilltop Gas & Go", "ADDRESS_1": "450 RIDGE PIKE",
   "COUNTY": "  ", "SUBJECT_ITEM_ID": 4},
  {"AI_ID": 400, "AI_NAME": "Old Mill Station", "ADDRESS_1": "3 Mill Ln",
   "COUNTY": "boone", "OWNER_NAME": "Green River Oil", "SUBJECT_ITEM_ID": 5},
  {"AI_ID": 500, "AI_NAME": "Depot Fuel Stop", "COUNTY": "Adair", "SUBJECT_ITEM_ID": 6}
]"#;

pub const OWNERS: &str = r#"[
  {"OWNER_NAME": "Bluegrass Fuel Co", "OWNER_ADDR1": "200 E Vine St", "OWNER_CITY": "Lexington",
   "OWNER_STATE": "KY", "OWNER_ZIP": 40507, "OWNER_PHONE": "859-555-0100"},
  {"OWNER_NAME": "BLUEGRASS FUEL CO", "OWNER_ADDR1": "duplicate, never reached"},
  {"OWNER_NAME": "Capital Petroleum LLC", "OWNER_CITY": "Frankfort", "OWNER_PHONE": null},
  {"OWNER_ADDR1": "nameless"}
]"#;

pub fn dataset() -> Dataset {
    Dataset::from_json(FACILITIES, OWNERS).unwrap()
}
