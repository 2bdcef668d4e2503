use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    dto::storage_slots::{StorageSlotList, StorageSlotWithUnits},
    entity::{
        storage_slots::{Column as SlotCol, Entity as StorageSlots},
        units::{Column as UnitCol, Entity as Units},
    },
    error::{AppError, AppResult},
    models::{StorageSlot, Unit},
    response::{ApiResponse, Meta},
    routes::params::StorageSlotQuery,
    state::AppState,
};

pub async fn list_slots(
    state: &AppState,
    query: StorageSlotQuery,
) -> AppResult<ApiResponse<StorageSlotList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();
    if let Some(size) = query.size {
        condition = condition.add(SlotCol::Size.eq(size.as_str()));
    }
    if let Some(available) = query.available {
        condition = condition.add(SlotCol::Availability.eq(available));
    }

    let finder = StorageSlots::find()
        .filter(condition)
        .order_by_asc(SlotCol::SquareFeet)
        .order_by_asc(SlotCol::Price);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(StorageSlot::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Storage slots",
        StorageSlotList { items },
        Some(meta),
    ))
}

pub async fn get_slot(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<StorageSlotWithUnits>> {
    let slot = StorageSlots::find_by_id(id).one(&state.orm).await?;
    let slot = match slot {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    let units = Units::find()
        .filter(UnitCol::StorageSlotId.eq(slot.id))
        .order_by_asc(UnitCol::UnitNumber)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Unit::from)
        .collect();

    Ok(ApiResponse::success(
        "Storage slot",
        StorageSlotWithUnits {
            slot: StorageSlot::from(slot),
            units,
        },
        Some(Meta::empty()),
    ))
}
