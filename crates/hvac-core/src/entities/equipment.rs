use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Manufacturer;
use crate::enums::{EquipmentStatus, EquipmentType};

/// Free-form feature mapping attached to a catalog record.
pub type Features = serde_json::Map<String, serde_json::Value>;

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn is_unset_f64(value: &Option<f64>) -> bool {
    value.is_none_or(|v| v == 0.0)
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn is_unset_i64(value: &Option<i64>) -> bool {
    value.is_none_or(|v| v == 0)
}

/// A sellable catalog record joined with its manufacturer.
///
/// Specification fields are optional because each equipment type publishes a
/// different subset (a furnace has an AFUE but no SEER2). Catalog rows also
/// record an unpublished rating as `0`, so both `None` and zero are omitted
/// from JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub manufacturer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Manufacturer>,
    pub model_number: String,
    pub equipment_type: EquipmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,

    #[serde(default, skip_serializing_if = "is_unset_f64")]
    pub tonnage: Option<f64>,
    #[serde(default, skip_serializing_if = "is_unset_i64")]
    pub btu_cooling: Option<i64>,
    #[serde(default, skip_serializing_if = "is_unset_i64")]
    pub btu_heating: Option<i64>,
    #[serde(default, skip_serializing_if = "is_unset_f64")]
    pub seer2: Option<f64>,
    #[serde(default, skip_serializing_if = "is_unset_f64")]
    pub eer2: Option<f64>,
    #[serde(default, skip_serializing_if = "is_unset_f64")]
    pub hspf2: Option<f64>,
    #[serde(default, skip_serializing_if = "is_unset_f64")]
    pub afue: Option<f64>,

    pub retail_price: f64,
    #[serde(default)]
    pub features: Features,
    pub status: EquipmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Equipment {
    /// Manufacturer code, when the record was loaded with its join.
    #[must_use]
    pub fn manufacturer_code(&self) -> Option<&str> {
        self.manufacturer.as_ref().map(|m| m.code.as_str())
    }
}
