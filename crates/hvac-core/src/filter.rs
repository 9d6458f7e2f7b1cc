//! Catalog filter criteria.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EquipmentType;
use crate::errors::CoreError;

/// Optional constraints on the equipment catalog.
///
/// Every field is independently optional and an absent field imposes no
/// constraint. Presence is explicit: `minTonnage: 0.0` is a real bound.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentFilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<EquipmentType>,
    /// Inclusive lower tonnage bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_tonnage: Option<f64>,
    /// Inclusive upper tonnage bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tonnage: Option<f64>,
    /// Manufacturer code (not identity).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

impl EquipmentFilterCriteria {
    /// True when no field is set, i.e. the criteria select the whole active
    /// catalog.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.equipment_type.is_none()
            && self.min_tonnage.is_none()
            && self.max_tonnage.is_none()
            && self.manufacturer.is_none()
    }

    /// Check the criteria are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidField` for a negative or non-finite tonnage
    /// bound or an empty manufacturer code, and `CoreError::Validation` when
    /// `maxTonnage < minTonnage`.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, bound) in [
            ("minTonnage", self.min_tonnage),
            ("maxTonnage", self.max_tonnage),
        ] {
            if let Some(value) = bound {
                if !value.is_finite() || value < 0.0 {
                    return Err(CoreError::InvalidField {
                        field: field.to_string(),
                        reason: format!("must be a non-negative number, got {value}"),
                    });
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_tonnage, self.max_tonnage) {
            if max < min {
                return Err(CoreError::Validation(format!(
                    "maxTonnage ({max}) must be greater than or equal to minTonnage ({min})"
                )));
            }
        }

        if self
            .manufacturer
            .as_deref()
            .is_some_and(|code| code.trim().is_empty())
        {
            return Err(CoreError::InvalidField {
                field: "manufacturer".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
