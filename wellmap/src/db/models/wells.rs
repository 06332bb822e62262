use crate::types::WellId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A well with usable coordinates, projected to the columns a map marker needs.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WellMarker {
    pub well_id: WellId,
    pub api_number: Option<String>,
    /// `wells.well_name`
    pub name: Option<String>,
    pub latitude: String,
    pub longitude: String,
}

/// Every column of a `wells` row, keyed by column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WellRecord(pub Map<String, Value>);

impl WellRecord {
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

#[cfg(test)]
impl WellRecord {
    pub fn well_id(&self) -> Option<WellId> {
        self.0.get("well_id").and_then(Value::as_i64)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }
}
