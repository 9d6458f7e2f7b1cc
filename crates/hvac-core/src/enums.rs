//! Enumerated catalog and sizing vocabularies.
//!
//! All enums serialize as `snake_case` strings, which is also the form stored
//! in SQL columns. `as_str()` returns that storage form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EquipmentType
// ---------------------------------------------------------------------------

/// Category of a catalog equipment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Furnace,
    HeatPump,
    AirHandler,
    MiniSplit,
}

impl EquipmentType {
    pub const ALL: [Self; 4] = [
        Self::Furnace,
        Self::HeatPump,
        Self::AirHandler,
        Self::MiniSplit,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Furnace => "furnace",
            Self::HeatPump => "heat_pump",
            Self::AirHandler => "air_handler",
            Self::MiniSplit => "mini_split",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Catalog visibility of an equipment record.
///
/// Only `Active` records are returned by any read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Active,
    Discontinued,
    Draft,
}

impl EquipmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Discontinued => "discontinued",
            Self::Draft => "draft",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HomeAge
// ---------------------------------------------------------------------------

/// Construction-era bracket of the home being sized.
///
/// `Unknown` is the value of an unanswered question and applies no
/// adjustment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum HomeAge {
    #[serde(rename = "before_1960")]
    Before1960,
    #[serde(rename = "1960_1979")]
    From1960To1979,
    #[serde(rename = "1980_1999")]
    From1980To1999,
    #[serde(rename = "2000_2009")]
    From2000To2009,
    #[serde(rename = "2010_or_later")]
    From2010,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl HomeAge {
    pub const ALL: [Self; 6] = [
        Self::Before1960,
        Self::From1960To1979,
        Self::From1980To1999,
        Self::From2000To2009,
        Self::From2010,
        Self::Unknown,
    ];

    /// Whether the bracket predates modern envelope standards and needs
    /// extra capacity.
    #[must_use]
    pub const fn is_older_envelope(self) -> bool {
        matches!(self, Self::Before1960 | Self::From1960To1979)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Before1960 => "before_1960",
            Self::From1960To1979 => "1960_1979",
            Self::From1980To1999 => "1980_1999",
            Self::From2000To2009 => "2000_2009",
            Self::From2010 => "2010_or_later",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label used by the questionnaire.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Before1960 => "Before 1960",
            Self::From1960To1979 => "1960 - 1979",
            Self::From1980To1999 => "1980 - 1999",
            Self::From2000To2009 => "2000 - 2009",
            Self::From2010 => "2010 or later",
            Self::Unknown => "Not sure",
        }
    }
}

impl fmt::Display for HomeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EstimationMethod
// ---------------------------------------------------------------------------

/// Technique that produced a sizing estimate.
///
/// Only area-based rule-of-thumb sizing exists. A certified room-by-room
/// load calculation is a different technique and is not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EstimationMethod {
    RuleOfThumb,
}

impl EstimationMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RuleOfThumb => "rule_of_thumb",
        }
    }
}

impl fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EstimateConfidence
// ---------------------------------------------------------------------------

/// Precision of a sizing estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EstimateConfidence {
    Estimated,
}

impl EstimateConfidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Estimated => "estimated",
        }
    }
}

impl fmt::Display for EstimateConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `as_str()` must agree with the serde form, since SQL columns are
    /// decoded through serde.
    #[test]
    fn equipment_type_as_str_matches_serde() {
        for variant in EquipmentType::ALL {
            let json = serde_json::to_value(variant).unwrap();
            assert_eq!(json, serde_json::Value::String(variant.as_str().into()));
        }
    }

    #[test]
    fn home_age_as_str_matches_serde() {
        for variant in HomeAge::ALL {
            let json = serde_json::to_value(variant).unwrap();
            assert_eq!(json, serde_json::Value::String(variant.as_str().into()));
        }
    }

    #[test]
    fn only_pre_1980_brackets_are_older_envelopes() {
        let older: Vec<_> = HomeAge::ALL
            .into_iter()
            .filter(|age| age.is_older_envelope())
            .collect();
        assert_eq!(older, vec![HomeAge::Before1960, HomeAge::From1960To1979]);
    }

    #[test]
    fn home_age_defaults_to_unknown() {
        assert_eq!(HomeAge::default(), HomeAge::Unknown);
    }

    #[test]
    fn unknown_equipment_type_is_rejected() {
        let result = serde_json::from_str::<EquipmentType>("\"boiler\"");
        assert!(result.is_err());
    }

    #[test]
    fn fixed_tags_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&EstimationMethod::RuleOfThumb).unwrap(),
            "\"rule_of_thumb\""
        );
        assert_eq!(
            serde_json::to_string(&EstimateConfidence::Estimated).unwrap(),
            "\"estimated\""
        );
    }
}
