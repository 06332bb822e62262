use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Every column of a `stimulations` row, keyed by column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StimulationRecord(pub Map<String, Value>);

impl StimulationRecord {
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

#[cfg(test)]
impl StimulationRecord {
    pub fn stimulation_id(&self) -> Option<crate::types::StimulationId> {
        self.0.get("stimulation_id").and_then(Value::as_i64)
    }

    pub fn well_id(&self) -> Option<crate::types::WellId> {
        self.0.get("well_id").and_then(Value::as_i64)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }
}
