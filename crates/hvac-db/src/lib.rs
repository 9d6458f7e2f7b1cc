//! # hvac-db
//!
//! libSQL access to the equipment catalog.
//!
//! Read-only catalog operations: the unfiltered catalog list, the
//! criteria-driven filter (see [`query`] for how criteria become predicates),
//! single-record lookup, and the manufacturer list. Nothing in this crate
//! writes catalog rows.
//!
//! Uses the `libsql` crate (C `SQLite` fork).

pub mod error;
pub mod helpers;
mod migrations;
pub mod query;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle for the equipment catalog.
pub struct HvacDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl HvacDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Applies the catalog schema on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the
    /// schema cannot be applied.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let hvac_db = Self { db, conn };
        hvac_db.run_migrations().await?;
        Ok(hvac_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> HvacDb {
        HvacDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["manufacturers", "equipment_models"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn equipment_requires_existing_manufacturer() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO equipment_models (id, manufacturer_id, model_number, equipment_type, retail_price)
                 VALUES ('eqp-x', 'mfr-missing', 'X1', 'furnace', 1000.0)",
                (),
            )
            .await;
        assert!(result.is_err(), "foreign key should reject unknown manufacturer");
    }

    #[tokio::test]
    async fn manufacturer_code_is_unique() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO manufacturers (id, name, code) VALUES ('mfr-1', 'Carrier', 'CARR')",
                (),
            )
            .await
            .unwrap();
        let result = db
            .conn()
            .execute(
                "INSERT INTO manufacturers (id, name, code) VALUES ('mfr-2', 'Carrier Corp', 'CARR')",
                (),
            )
            .await;
        assert!(result.is_err(), "duplicate manufacturer code should be rejected");
    }
}
