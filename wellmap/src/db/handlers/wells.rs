//! Database repository for wells.

use crate::db::errors::Result;
use crate::db::models::wells::{WellMarker, WellRecord};
use crate::types::WellId;
use serde_json::{Map, Value};
use sqlx::{PgPool, types::Json};
use tracing::instrument;

pub struct Wells<'c> {
    db: &'c PgPool,
}

impl<'c> Wells<'c> {
    pub fn new(db: &'c PgPool) -> Self {
        Self { db }
    }

    /// List every well whose latitude and longitude are both present and non-blank.
    ///
    /// Coordinates are returned as text exactly as stored. Row order is whatever the planner
    /// produces.
    #[instrument(skip(self), err)]
    pub async fn list_mappable(&self) -> Result<Vec<WellMarker>> {
        let wells = sqlx::query_as::<_, WellMarker>(
            r#"
            SELECT
                well_id,
                api_number,
                well_name AS name,
                latitude::text AS latitude,
                longitude::text AS longitude
            FROM wells
            WHERE latitude IS NOT NULL
              AND longitude IS NOT NULL
              AND btrim(latitude::text) <> ''
              AND btrim(longitude::text) <> ''
            "#,
        )
        .fetch_all(self.db)
        .await?;

        Ok(wells)
    }

    /// Fetch the full row for one well.
    #[instrument(skip(self), err)]
    pub async fn get_by_id(&self, id: WellId) -> Result<Option<WellRecord>> {
        let record = sqlx::query_scalar::<_, Json<Map<String, Value>>>("SELECT to_jsonb(w) FROM wells w WHERE w.well_id = $1")
            .bind(id)
            .fetch_optional(self.db)
            .await?;

        Ok(record.map(|Json(row)| WellRecord(row)))
    }
}
