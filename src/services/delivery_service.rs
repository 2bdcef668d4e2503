use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    dto::deliveries::DeliveryList,
    entity::deliveries::{Column as DeliveryCol, Entity as Deliveries},
    error::AppResult,
    middleware::auth::{AuthUser, ensure_staff},
    models::Delivery,
    response::{ApiResponse, Meta},
    routes::params::DeliveryQuery,
    state::AppState,
};

pub async fn list_deliveries(
    state: &AppState,
    user: &AuthUser,
    query: DeliveryQuery,
) -> AppResult<ApiResponse<DeliveryList>> {
    ensure_staff(user)?;
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();
    if let Some(order_id) = query.order_id {
        condition = condition.add(DeliveryCol::OrderId.eq(order_id));
    }

    let finder = Deliveries::find()
        .filter(condition)
        .order_by_asc(DeliveryCol::DeliveryDate);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Delivery::from)
        .collect();

    Ok(ApiResponse::success(
        "Deliveries",
        DeliveryList { items },
        Some(Meta::new(page, limit, total)),
    ))
}
