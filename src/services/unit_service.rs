use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    dto::units::UnitList,
    entity::units::{Column as UnitCol, Entity as Units},
    error::{AppError, AppResult},
    models::Unit,
    response::{ApiResponse, Meta},
    routes::params::UnitQuery,
    state::AppState,
};

pub async fn list_units(state: &AppState, query: UnitQuery) -> AppResult<ApiResponse<UnitList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();
    if let Some(slot_id) = query.storage_slot_id {
        condition = condition.add(UnitCol::StorageSlotId.eq(slot_id));
    }

    let finder = Units::find()
        .filter(condition)
        .order_by_asc(UnitCol::UnitNumber);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Unit::from)
        .collect();

    Ok(ApiResponse::success(
        "Units",
        UnitList { items },
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_unit(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Unit>> {
    let unit = Units::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Unit::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Unit", unit, None))
}
