use crate::api::models::errors::ErrorResponse;
use crate::api::models::wells::{WellDetailResponse, WellSummary};
use crate::db::handlers::{Stimulations, Wells};
use crate::errors::{Error, Result};
use crate::types::WellId;
use crate::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

/// List every well that can be placed on the map.
#[utoipa::path(
    get,
    path = "/wells",
    tag = "wells",
    summary = "List mappable wells",
    description = "Wells whose latitude and longitude are both present and non-empty. Order is unspecified.",
    responses(
        (status = 200, description = "Mappable wells (possibly empty)", body = Vec<WellSummary>),
        (status = 500, description = "Data access failure", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_wells(State(state): State<AppState>) -> Result<Json<Vec<WellSummary>>> {
    let wells = Wells::new(state.db.read()).list_mappable().await?;

    Ok(Json(wells.into_iter().map(WellSummary::from).collect()))
}

/// Fetch one well's full record and its stimulation history.
#[utoipa::path(
    get,
    path = "/wells/{id}",
    tag = "wells",
    summary = "Get well detail",
    params(
        ("id" = String, Path, description = "Well identifier"),
    ),
    responses(
        (status = 200, description = "Well row and its stimulations ordered by stimulation_id", body = WellDetailResponse),
        (status = 404, description = "No well with this identifier", body = ErrorResponse),
        (status = 500, description = "Data access failure", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_well(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<WellDetailResponse>> {
    // Identifiers are integers; anything else cannot match a row
    let well_id: WellId = id.trim().parse().map_err(|_| Error::well_not_found(&id))?;

    let pool = state.db.read();
    let well = Wells::new(pool)
        .get_by_id(well_id)
        .await?
        .ok_or_else(|| Error::well_not_found(well_id))?;

    let stimulations = Stimulations::new(pool).list_for_well(well_id).await?;

    Ok(Json(WellDetailResponse::new(well, stimulations)))
}
