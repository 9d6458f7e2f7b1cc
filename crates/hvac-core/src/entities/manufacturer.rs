use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An equipment brand. `code` is unique and is the filter join key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
    pub code: String,
}
