//! Service layer over the catalog database.
//!
//! `HvacService` wraps `HvacDb`. Catalog read operations are implemented as
//! `impl HvacService` blocks in [`crate::repos`].

use crate::HvacDb;
use crate::error::DatabaseError;

pub struct HvacService {
    db: HvacDb,
}

impl HvacService {
    /// Open a service over a local database file, or `":memory:"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = HvacDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `HvacDb`.
    #[must_use]
    pub const fn from_db(db: HvacDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &HvacDb {
        &self.db
    }
}
