//! Equipment catalog query composition.
//!
//! Translates [`EquipmentFilterCriteria`] into a conjunction of
//! parameterized predicates over `equipment_models` joined with
//! `manufacturers`. Composition is pure: nothing here touches a connection.
//!
//! Every query starts from `status = 'active'`. Each criteria field that is
//! present adds exactly one predicate, and predicates are only ever combined
//! with `AND`.
//!
//! Ordering depends on whether any criteria were supplied:
//! - none: `equipment_type, tonnage` (the default catalog browse view)
//! - any:  `retail_price`
//!
//! The asymmetry is part of the published response contract and is kept
//! as is. Both orderings end with `model_number` so ties come back in a
//! stable order.

use hvac_core::enums::{EquipmentStatus, EquipmentType};
use hvac_core::filter::EquipmentFilterCriteria;

pub(crate) const EQUIPMENT_COLS: &str = "e.id, e.manufacturer_id, e.model_number, e.equipment_type, \
     e.series_name, e.tonnage, e.btu_cooling, e.btu_heating, e.seer2, e.eer2, e.hspf2, e.afue, \
     e.retail_price, e.features, e.status, e.created_at, e.updated_at, \
     m.id, m.name, m.code";

const EQUIPMENT_FROM: &str =
    "FROM equipment_models e JOIN manufacturers m ON e.manufacturer_id = m.id";

/// One `column op ?N` term of the WHERE clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Status(EquipmentStatus),
    Id(String),
    EquipmentType(EquipmentType),
    /// Inclusive lower tonnage bound.
    MinTonnage(f64),
    /// Inclusive upper tonnage bound.
    MaxTonnage(f64),
    /// Joined on the manufacturer's code, not its identity.
    ManufacturerCode(String),
}

impl Predicate {
    const fn column_and_op(&self) -> (&'static str, &'static str) {
        match self {
            Self::Status(_) => ("e.status", "="),
            Self::Id(_) => ("e.id", "="),
            Self::EquipmentType(_) => ("e.equipment_type", "="),
            Self::MinTonnage(_) => ("e.tonnage", ">="),
            Self::MaxTonnage(_) => ("e.tonnage", "<="),
            Self::ManufacturerCode(_) => ("m.code", "="),
        }
    }

    fn to_sql(&self, placeholder: usize) -> String {
        let (column, op) = self.column_and_op();
        format!("{column} {op} ?{placeholder}")
    }

    fn to_value(&self) -> libsql::Value {
        match self {
            Self::Status(status) => libsql::Value::Text(status.as_str().to_string()),
            Self::EquipmentType(ty) => libsql::Value::Text(ty.as_str().to_string()),
            Self::Id(s) | Self::ManufacturerCode(s) => libsql::Value::Text(s.clone()),
            Self::MinTonnage(t) | Self::MaxTonnage(t) => libsql::Value::Real(*t),
        }
    }
}

/// Result ordering of a catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrder {
    TypeThenTonnage,
    RetailPrice,
}

impl CatalogOrder {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::TypeThenTonnage => "ORDER BY e.equipment_type, e.tonnage, e.model_number",
            Self::RetailPrice => "ORDER BY e.retail_price, e.model_number",
        }
    }
}

/// A composed, parameterized catalog query.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentQuery {
    predicates: Vec<Predicate>,
    order: CatalogOrder,
}

impl EquipmentQuery {
    /// The unfiltered catalog: every active record by type then tonnage.
    #[must_use]
    pub fn list() -> Self {
        Self {
            predicates: vec![Predicate::Status(EquipmentStatus::Active)],
            order: CatalogOrder::TypeThenTonnage,
        }
    }

    /// Compose the query for a criteria set.
    ///
    /// Empty criteria compose exactly [`Self::list`].
    #[must_use]
    pub fn compose(criteria: &EquipmentFilterCriteria) -> Self {
        let mut query = Self::list();
        if criteria.is_empty() {
            return query;
        }

        if let Some(ty) = criteria.equipment_type {
            query.predicates.push(Predicate::EquipmentType(ty));
        }
        if let Some(min) = criteria.min_tonnage {
            query.predicates.push(Predicate::MinTonnage(min));
        }
        if let Some(max) = criteria.max_tonnage {
            query.predicates.push(Predicate::MaxTonnage(max));
        }
        if let Some(ref code) = criteria.manufacturer {
            query.predicates.push(Predicate::ManufacturerCode(code.clone()));
        }
        query.order = CatalogOrder::RetailPrice;
        query
    }

    /// A single active record by id.
    #[must_use]
    pub fn by_id(id: &str) -> Self {
        let mut query = Self::list();
        query.predicates.push(Predicate::Id(id.to_string()));
        query
    }

    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    #[must_use]
    pub const fn order(&self) -> CatalogOrder {
        self.order
    }

    /// Render the SQL text. Placeholders are numbered in predicate order.
    #[must_use]
    pub fn sql(&self) -> String {
        let conditions = self
            .predicates
            .iter()
            .enumerate()
            .map(|(i, p)| p.to_sql(i + 1))
            .collect::<Vec<_>>()
            .join(" AND ");
        format!(
            "SELECT {EQUIPMENT_COLS} {EQUIPMENT_FROM} WHERE {conditions} {}",
            self.order.as_sql()
        )
    }

    /// Bind values in placeholder order.
    #[must_use]
    pub fn params(&self) -> Vec<libsql::Value> {
        self.predicates.iter().map(Predicate::to_value).collect()
    }
}
