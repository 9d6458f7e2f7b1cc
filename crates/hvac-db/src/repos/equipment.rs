//! Equipment catalog repository: list, filter, and lookup.
//!
//! Only `status = 'active'` records are ever returned. A row whose columns
//! fail to decode is dropped from list/filter results and logged; a failure
//! to run the query or advance the cursor fails the whole call with
//! `DatabaseError::FetchFailed`.

use hvac_core::entities::{Equipment, Manufacturer};
use hvac_core::filter::EquipmentFilterCriteria;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_features};
use crate::query::EquipmentQuery;
use crate::service::HvacService;

fn row_to_equipment(row: &libsql::Row) -> Result<Equipment, DatabaseError> {
    Ok(Equipment {
        id: row.get(0)?,
        manufacturer_id: row.get(1)?,
        model_number: row.get(2)?,
        equipment_type: parse_enum(&row.get::<String>(3)?)?,
        series_name: get_opt_string(row, 4)?,
        tonnage: row.get::<Option<f64>>(5)?,
        btu_cooling: row.get::<Option<i64>>(6)?,
        btu_heating: row.get::<Option<i64>>(7)?,
        seer2: row.get::<Option<f64>>(8)?,
        eer2: row.get::<Option<f64>>(9)?,
        hspf2: row.get::<Option<f64>>(10)?,
        afue: row.get::<Option<f64>>(11)?,
        retail_price: row.get(12)?,
        features: parse_features(get_opt_string(row, 13)?.as_deref())?,
        status: parse_enum(&row.get::<String>(14)?)?,
        created_at: parse_datetime(&row.get::<String>(15)?)?,
        updated_at: parse_datetime(&row.get::<String>(16)?)?,
        manufacturer: Some(Manufacturer {
            id: row.get(17)?,
            name: row.get(18)?,
            code: row.get(19)?,
        }),
    })
}

fn fetch_failed(error: libsql::Error) -> DatabaseError {
    DatabaseError::FetchFailed(error.to_string())
}

impl HvacService {
    /// Every active record joined with its manufacturer, ordered by
    /// equipment type then tonnage.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::FetchFailed` if the catalog cannot be read.
    pub async fn list_equipment(&self) -> Result<Vec<Equipment>, DatabaseError> {
        self.fetch_equipment(&EquipmentQuery::list()).await
    }

    /// Active records matching every supplied criterion.
    ///
    /// Ordered by retail price when any criterion is supplied; empty criteria
    /// behave exactly like [`Self::list_equipment`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::FetchFailed` if the catalog cannot be read.
    pub async fn filter_equipment(
        &self,
        criteria: &EquipmentFilterCriteria,
    ) -> Result<Vec<Equipment>, DatabaseError> {
        self.fetch_equipment(&EquipmentQuery::compose(criteria)).await
    }

    /// A single active record by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no active record has this id,
    /// `DatabaseError::FetchFailed` if the read fails, or the decode error if
    /// the stored row is malformed.
    pub async fn get_equipment(&self, id: &str) -> Result<Equipment, DatabaseError> {
        let query = EquipmentQuery::by_id(id);
        let mut rows = self
            .db()
            .conn()
            .query(&query.sql(), libsql::params_from_iter(query.params()))
            .await
            .map_err(fetch_failed)?;
        let row = rows
            .next()
            .await
            .map_err(fetch_failed)?
            .ok_or(DatabaseError::NoResult)?;
        row_to_equipment(&row)
    }

    async fn fetch_equipment(&self, query: &EquipmentQuery) -> Result<Vec<Equipment>, DatabaseError> {
        let sql = query.sql();
        tracing::debug!(
            %sql,
            predicates = query.predicates().len(),
            order = ?query.order(),
            "fetching equipment"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(query.params()))
            .await
            .map_err(fetch_failed)?;

        let mut equipment = Vec::new();
        let mut skipped = 0usize;
        while let Some(row) = rows.next().await.map_err(fetch_failed)? {
            match row_to_equipment(&row) {
                Ok(record) => equipment.push(record),
                Err(error) => {
                    skipped += 1;
                    let id = row.get::<String>(0).ok();
                    tracing::warn!(
                        id = id.as_deref().unwrap_or("<unreadable>"),
                        %error,
                        "skipping equipment row that failed to decode"
                    );
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(
                skipped,
                returned = equipment.len(),
                "equipment rows dropped from catalog result"
            );
        }
        Ok(equipment)
    }
}
