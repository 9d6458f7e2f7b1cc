//! Manufacturer repository.

use hvac_core::entities::Manufacturer;

use crate::error::DatabaseError;
use crate::service::HvacService;

fn row_to_manufacturer(row: &libsql::Row) -> Result<Manufacturer, DatabaseError> {
    Ok(Manufacturer {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        code: row.get::<String>(2)?,
    })
}

impl HvacService {
    /// All manufacturers ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::FetchFailed` if the table cannot be read or a
    /// row cannot be decoded.
    pub async fn list_manufacturers(&self) -> Result<Vec<Manufacturer>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name, code FROM manufacturers ORDER BY name", ())
            .await
            .map_err(|e| DatabaseError::FetchFailed(e.to_string()))?;
        let mut results = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DatabaseError::FetchFailed(e.to_string()))?
        {
            results.push(
                row_to_manufacturer(&row).map_err(|e| DatabaseError::FetchFailed(e.to_string()))?,
            );
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DatabaseError;
    use crate::test_support::helpers::{seeded_service, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn manufacturers_ordered_by_name() {
        let svc = seeded_service().await;
        let manufacturers = svc.list_manufacturers().await.unwrap();
        let names: Vec<&str> = manufacturers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Carrier", "Lennox", "Trane"]);
        assert_eq!(manufacturers[2].code, "TRANE");
    }

    #[tokio::test]
    async fn undecodable_row_is_fetch_failed() {
        let svc = test_service().await;
        svc.db()
            .conn()
            .execute(
                "INSERT INTO manufacturers (id, name, code) VALUES ('mfr-bad', 'Bad', ?1)",
                libsql::params![vec![0xffu8, 0xfe]],
            )
            .await
            .unwrap();

        let result = svc.list_manufacturers().await;
        assert!(matches!(result, Err(DatabaseError::FetchFailed(_))));
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let svc = test_service().await;
        assert!(svc.list_manufacturers().await.unwrap().is_empty());
    }
}
