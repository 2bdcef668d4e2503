use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::units::UnitList,
    error::AppResult,
    models::Unit,
    response::ApiResponse,
    routes::params::UnitQuery,
    services::unit_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_units))
        .route("/{id}", get(get_unit))
}

#[utoipa::path(
    get,
    path = "/api/units",
    params(UnitQuery),
    responses(
        (status = 200, description = "List units", body = ApiResponse<UnitList>)
    ),
    tag = "Units"
)]
pub async fn list_units(
    State(state): State<AppState>,
    Query(query): Query<UnitQuery>,
) -> AppResult<Json<ApiResponse<UnitList>>> {
    let resp = unit_service::list_units(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/units/{id}",
    params(
        ("id" = Uuid, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Get unit", body = ApiResponse<Unit>),
        (status = 404, description = "Unit not found"),
    ),
    tag = "Units"
)]
pub async fn get_unit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Unit>>> {
    let resp = unit_service::get_unit(&state, id).await?;
    Ok(Json(resp))
}
