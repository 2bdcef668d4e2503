use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod deliveries;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod storage_slots;
pub mod units;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/storage-slots", storage_slots::router())
        .nest("/units", units::router())
        .nest("/users", users::router())
        .nest("/orders", orders::router())
        .nest("/deliveries", deliveries::router())
}
