//! Row-to-entity parsing helpers.
//!
//! Convert `libsql::Row` columns (index-addressed) into typed entity fields.
//! Handles both RFC 3339 timestamps and `SQLite`'s `datetime('now')` format.

use chrono::{DateTime, Utc};
use hvac_core::entities::Features;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Accepts RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all hvac-core enums, whose serde form is their storage form.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Parse the `features` TEXT column as a JSON object.
///
/// NULL and empty strings decode to an empty mapping.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not valid JSON or is valid
/// JSON but not an object.
pub fn parse_features(s: Option<&str>) -> Result<Features, DatabaseError> {
    match s {
        Some(s) if !s.trim().is_empty() => {
            let value: serde_json::Value = serde_json::from_str(s)
                .map_err(|e| DatabaseError::Query(format!("Invalid JSON in features: {e}")))?;
            match value {
                serde_json::Value::Object(map) => Ok(map),
                other => Err(DatabaseError::Query(format!(
                    "features must be a JSON object, got {other}"
                ))),
            }
        }
        _ => Ok(Features::new()),
    }
}
