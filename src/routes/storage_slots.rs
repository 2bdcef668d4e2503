use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::storage_slots::{StorageSlotList, StorageSlotWithUnits},
    error::AppResult,
    response::ApiResponse,
    routes::params::StorageSlotQuery,
    services::storage_slot_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_storage_slots))
        .route("/{id}", get(get_storage_slot))
}

#[utoipa::path(
    get,
    path = "/api/storage-slots",
    params(StorageSlotQuery),
    responses(
        (status = 200, description = "List storage slots", body = ApiResponse<StorageSlotList>)
    ),
    tag = "Storage Slots"
)]
pub async fn list_storage_slots(
    State(state): State<AppState>,
    Query(query): Query<StorageSlotQuery>,
) -> AppResult<Json<ApiResponse<StorageSlotList>>> {
    let resp = storage_slot_service::list_slots(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/storage-slots/{id}",
    params(
        ("id" = Uuid, Path, description = "Storage slot ID")
    ),
    responses(
        (status = 200, description = "Storage slot with its units", body = ApiResponse<StorageSlotWithUnits>),
        (status = 404, description = "Storage slot not found"),
    ),
    tag = "Storage Slots"
)]
pub async fn get_storage_slot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<StorageSlotWithUnits>>> {
    let resp = storage_slot_service::get_slot(&state, id).await?;
    Ok(Json(resp))
}
