//! Embedded catalog schema.
//!
//! Executed on every open. All statements use `IF NOT EXISTS`, so re-running
//! against an existing catalog is a no-op.

use crate::HvacDb;
use crate::error::DatabaseError;

const MIGRATION_001: &str = include_str!("../migrations/001_catalog.sql");

impl HvacDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_catalog: {e}")))?;
        Ok(())
    }
}
