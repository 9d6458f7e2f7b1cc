//! # hvac-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HVAC_*` prefix, `__` as separator)
//! 2. Project-level `.hvac/config.toml`
//! 3. User-level `~/.config/hvac/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `HVAC_DATABASE__PATH` -> `database.path`,
//! `HVAC_ESTIMATION__PRICE_PER_TON` -> `estimation.price_per_ton`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hvac_config::HvacConfig;
//!
//! let config = HvacConfig::load_with_dotenv().expect("config");
//! println!("catalog: {}", config.database.path);
//! ```

mod database;
mod error;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use hvac_core::estimation::EstimationParams;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HvacConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub estimation: EstimationParams,
}

impl HvacConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed and
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it inside a `figment::Jail`.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".hvac/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HVAC_").split("__"))
    }

    /// Reject estimation constants that would divide by zero or produce
    /// negative capacities and prices.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let est = &self.estimation;
        let positive = [
            ("estimation.sqft_per_ton", est.sqft_per_ton),
            ("estimation.older_home_factor", est.older_home_factor),
            ("estimation.price_per_ton", est.price_per_ton),
            ("estimation.high_end_multiplier", est.high_end_multiplier),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }

        if est.high_end_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "estimation.high_end_multiplier".to_string(),
                reason: "must be at least 1.0 so the high bound never falls below the low bound"
                    .to_string(),
            });
        }

        if !est.installation_base.is_finite() || est.installation_base < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "estimation.installation_base".to_string(),
                reason: format!("must be non-negative, got {}", est.installation_base),
            });
        }

        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hvac").join("config.toml"))
    }
}
