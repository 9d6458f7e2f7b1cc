use std::path::Path;

use anyhow::Context;
use hvac_config::HvacConfig;
use hvac_db::service::HvacService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: HvacService,
}

impl AppContext {
    /// Open the catalog database named by `database.path`, creating its
    /// parent directory when needed.
    pub async fn init(config: HvacConfig) -> anyhow::Result<Self> {
        let db_path = &config.database.path;

        if !config.database.is_in_memory() {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        let service = HvacService::new_local(db_path)
            .await
            .with_context(|| format!("failed to open catalog database at {db_path}"))?;
        tracing::debug!(path = %db_path, "catalog database opened");

        Ok(Self { service })
    }
}
