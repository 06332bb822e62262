//! Database repository for stimulations.

use crate::db::errors::Result;
use crate::db::models::stimulations::StimulationRecord;
use crate::types::WellId;
use serde_json::{Map, Value};
use sqlx::{PgPool, types::Json};
use tracing::instrument;

pub struct Stimulations<'c> {
    db: &'c PgPool,
}

impl<'c> Stimulations<'c> {
    pub fn new(db: &'c PgPool) -> Self {
        Self { db }
    }

    /// Full rows of every stimulation recorded against `well_id`, ascending by `stimulation_id`.
    #[instrument(skip(self), err)]
    pub async fn list_for_well(&self, well_id: WellId) -> Result<Vec<StimulationRecord>> {
        let rows = sqlx::query_scalar::<_, Json<Map<String, Value>>>(
            "SELECT to_jsonb(s) FROM stimulations s WHERE s.well_id = $1 ORDER BY s.stimulation_id ASC",
        )
        .bind(well_id)
        .fetch_all(self.db)
        .await?;

        Ok(rows.into_iter().map(|Json(row)| StimulationRecord(row)).collect())
    }
}
