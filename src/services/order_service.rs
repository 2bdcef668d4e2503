use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    dto::orders::{OrderList, OrderWithDeliveries},
    entity::{
        deliveries::{Column as DeliveryCol, Entity as Deliveries},
        orders::{Column as OrderCol, Entity as Orders},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_self_or_staff},
    models::{Delivery, Order},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    state::AppState,
};

/// Staff see every order; clients only their own.
pub async fn list_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();
    if !user.role.is_staff() {
        condition = condition.add(OrderCol::UserId.eq(user.user_id));
    }

    let mut finder = Orders::find().filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => finder.order_by_asc(OrderCol::StartDate),
        SortOrder::Desc => finder.order_by_desc(OrderCol::StartDate),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    Ok(ApiResponse::success(
        "Orders",
        OrderList { items },
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithDeliveries>> {
    let order = Orders::find_by_id(id).one(&state.orm).await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };
    // Hide other customers' orders rather than reveal they exist.
    if ensure_self_or_staff(user, order.user_id).is_err() {
        return Err(AppError::NotFound);
    }

    let deliveries = Deliveries::find()
        .filter(DeliveryCol::OrderId.eq(order.id))
        .order_by_asc(DeliveryCol::DeliveryDate)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Delivery::from)
        .collect();

    Ok(ApiResponse::success(
        "OK",
        OrderWithDeliveries {
            order: Order::from(order),
            deliveries,
        },
        Some(Meta::empty()),
    ))
}
