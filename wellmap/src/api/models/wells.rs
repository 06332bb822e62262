use crate::db::models::stimulations::StimulationRecord;
use crate::db::models::wells::{WellMarker, WellRecord};
use crate::types::WellId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A mappable well, as rendered by the map's marker layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WellSummary {
    #[schema(example = 1)]
    pub well_id: WellId,
    /// Regulatory API number
    #[schema(example = "33-053-02102")]
    pub api_number: Option<String>,
    /// The well's `well_name`
    #[schema(example = "Atlanta 14-6H")]
    pub name: Option<String>,
    /// Latitude as stored, decimal degrees in text form
    #[schema(example = "48.0956")]
    pub latitude: String,
    /// Longitude as stored, decimal degrees in text form
    #[schema(example = "-103.6358")]
    pub longitude: String,
}

impl From<WellMarker> for WellSummary {
    fn from(marker: WellMarker) -> Self {
        Self {
            well_id: marker.well_id,
            api_number: marker.api_number,
            name: marker.name,
            latitude: marker.latitude,
            longitude: marker.longitude,
        }
    }
}

/// One well's full record and its stimulation history, for the detail popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WellDetailResponse {
    /// Every column of the `wells` row
    #[schema(value_type = Object)]
    pub well: Map<String, Value>,
    /// Every column of each `stimulations` row for the well, ascending by `stimulation_id`
    #[schema(value_type = Vec<Object>)]
    pub stimulations: Vec<Map<String, Value>>,
}

impl WellDetailResponse {
    pub fn new(well: WellRecord, stimulations: Vec<StimulationRecord>) -> Self {
        Self {
            well: well.into_inner(),
            stimulations: stimulations.into_iter().map(StimulationRecord::into_inner).collect(),
        }
    }
}
