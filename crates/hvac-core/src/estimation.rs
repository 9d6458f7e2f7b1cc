//! Named constants of the rule-of-thumb estimate.
//!
//! These are industry heuristics, not measured values. They are grouped here
//! so they can be tuned through configuration without touching the
//! algorithm.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const fn default_sqft_per_ton() -> f64 {
    500.0
}

const fn default_btu_per_sqft() -> u32 {
    40
}

const fn default_older_home_factor() -> f64 {
    1.15
}

const fn default_price_per_ton() -> f64 {
    3000.0
}

const fn default_installation_base() -> f64 {
    2000.0
}

const fn default_high_end_multiplier() -> f64 {
    2.5
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EstimationParams {
    /// Floor area served by one ton of cooling.
    #[serde(default = "default_sqft_per_ton")]
    pub sqft_per_ton: f64,

    /// Heating BTU/hr required per square foot.
    #[serde(default = "default_btu_per_sqft")]
    pub btu_per_sqft: u32,

    /// Capacity multiplier for homes built before 1980.
    #[serde(default = "default_older_home_factor")]
    pub older_home_factor: f64,

    /// Equipment price per ton of cooling.
    #[serde(default = "default_price_per_ton")]
    pub price_per_ton: f64,

    /// Flat installation cost added to every estimate.
    #[serde(default = "default_installation_base")]
    pub installation_base: f64,

    /// High bound over low bound; covers ductwork and electrical work.
    #[serde(default = "default_high_end_multiplier")]
    pub high_end_multiplier: f64,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self {
            sqft_per_ton: default_sqft_per_ton(),
            btu_per_sqft: default_btu_per_sqft(),
            older_home_factor: default_older_home_factor(),
            price_per_ton: default_price_per_ton(),
            installation_base: default_installation_base(),
            high_end_multiplier: default_high_end_multiplier(),
        }
    }
}
