use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::deliveries::DeliveryList,
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    routes::params::DeliveryQuery,
    services::delivery_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_deliveries))
}

#[utoipa::path(
    get,
    path = "/api/deliveries",
    params(DeliveryQuery),
    responses(
        (status = 200, description = "List deliveries (staff only)", body = ApiResponse<DeliveryList>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Deliveries"
)]
pub async fn list_deliveries(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<DeliveryQuery>,
) -> AppResult<Json<ApiResponse<DeliveryList>>> {
    let resp = delivery_service::list_deliveries(&state, &user, query).await?;
    Ok(Json(resp))
}
