use hvac_config::HvacConfig;

use crate::cli::GlobalFlags;

/// Load configuration from `.env`, TOML files and `HVAC_*` variables, then
/// apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HvacConfig> {
    let mut config = HvacConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut HvacConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        tracing::debug!(path = %path, "database path overridden from command line");
        config.database.path.clone_from(path);
    }
}
