// src/dataset/fields.rs
//! Column set of the facility/tank table.
//!
//! One macro invocation keeps three things in lockstep: the `Field` enum,
//! the JSON key of each column, and the struct member that stores it.

use serde::{Deserialize, Serialize};

use super::scalar::text;

macro_rules! facility_fields {
    ($( $variant:ident => $member:ident : $key:literal ),+ $(,)?) => {
        /// A column of [`FacilityTankRecord`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Field { $($variant),+ }

        impl Field {
            /// Every column, in dataset order.
            pub const ALL: &'static [Field] = &[$(Field::$variant),+];

            /// JSON key, e.g. `"AI_ID"`.
            pub fn key(self) -> &'static str {
                match self { $(Field::$variant => $key),+ }
            }

            pub fn from_key(key: &str) -> Option<Field> {
                match key {
                    $($key => Some(Field::$variant),)+
                    _ => None,
                }
            }
        }

        /// One tank (or compartment) at a facility.
        #[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
        pub struct FacilityTankRecord {
            $(
                #[serde(rename = $key, default, deserialize_with = "text",
                        skip_serializing_if = "Option::is_none")]
                pub $member: Option<String>,
            )+
        }

        impl FacilityTankRecord {
            /// Raw value, `None` when the source had no value.
            pub fn get(&self, field: Field) -> Option<&str> {
                match field { $(Field::$variant => self.$member.as_deref()),+ }
            }

            pub fn set(&mut self, field: Field, value: Option<String>) {
                match field { $(Field::$variant => self.$member = value),+ }
            }
        }
    };
}

facility_fields! {
    AiId                   => ai_id:                      "AI_ID",
    AiName                 => ai_name:                    "AI_NAME",
    Address1               => address_1:                  "ADDRESS_1",
    City                   => mailing_address_city:       "MAILING_ADDRESS_CITY",
    State                  => mailing_address_state:      "MAILING_ADDRESS_STATE",
    Zip                    => mailing_address_zip:        "MAILING_ADDRESS_ZIP",
    County                 => county:                     "COUNTY",
    OwnerName              => owner_name:                 "OWNER_NAME",
    Latitude               => latitude:                   "LATITUDE",
    Longitude              => longitude:                  "LONGITUDE",
    SubjectItemId          => subject_item_id:            "SUBJECT_ITEM_ID",
    CompartmentNumber      => compartment_number:         "COMPARTMENT_NUMBER",
    TankSubstanceCode      => tank_substance_code:        "TANK_SUBSTANCE_CODE",
    CapacityMsr            => capacity_msr:               "CAPACITY_MSR",
    TankStatusCode         => tank_status_code:           "TANK_STATUS_CODE",
    TankInstallDate        => tank_install_date:          "TANK_INSTALL_DATE",
    TempCloseDate          => temp_close_date:            "TEMP_CLOSE_DATE",
    LastContProductDate    => last_cont_product_date:     "LAST_CONT_PRODUCT_DATE",
    ClosedInPlaceDate      => closed_in_place_date:       "CLOSED_IN_PLACE_DATE",
    RemovalDate            => removal_date:               "REMOVAL_DATE",
    ServiceChangeDate      => service_change_date:        "SERVICE_CHANGE_DATE",
    TankMaterialCode       => tank_material_code:         "TANK_MATERIAL_CODE",
    TankExtCorrProtectCode => tank_ext_corr_protect_code: "TANK_EXT_CORR_PROTECT_CODE",
    LastCpTestDate         => last_cp_test_date:          "LAST_CP_TEST_DATE",
    TankManufctrCode       => tank_manufctr_code:         "TANK_MANUFCTR_CODE",
    TankReleaseDetectCode  => tank_release_detect_code:   "TANK_RELEASE_DETECT_CODE",
    LastTankTestDate       => last_tank_test_date:        "LAST_TANK_TEST_DATE",
    PipeMaterialCode       => pipe_material_code:         "PIPE_MATERIAL_CODE",
    PipeExtCorrProtectCode => pipe_ext_corr_protect_code: "PIPE_EXT_CORR_PROTECT_CODE",
    PipeTypeCode           => pipe_type_code:             "PIPE_TYPE_CODE",
    LineLeakDetectCode     => line_leak_detect_code:      "LINE_LEAK_DETECT_CODE",
}

impl Field {
    /// Row label in the tank table ("TANK_INSTALL_DATE" → "TANK INSTALL DATE").
    pub fn label(self) -> String {
        crate::core::sanitize::key_to_label(self.key())
    }
}

/// Rows of the per-facility tank table, top to bottom.
pub const TANK_TABLE_FIELDS: [Field; 21] = [
    Field::SubjectItemId,
    Field::CompartmentNumber,
    Field::TankSubstanceCode,
    Field::CapacityMsr,
    Field::TankStatusCode,
    Field::TankInstallDate,
    Field::TempCloseDate,
    Field::LastContProductDate,
    Field::ClosedInPlaceDate,
    Field::RemovalDate,
    Field::ServiceChangeDate,
    Field::TankMaterialCode,
    Field::TankExtCorrProtectCode,
    Field::LastCpTestDate,
    Field::TankManufctrCode,
    Field::TankReleaseDetectCode,
    Field::LastTankTestDate,
    Field::PipeMaterialCode,
    Field::PipeExtCorrProtectCode,
    Field::PipeTypeCode,
    Field::LineLeakDetectCode,
];
