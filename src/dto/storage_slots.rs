use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{StorageSlot, Unit};

#[derive(Debug, Serialize, ToSchema)]
pub struct StorageSlotList {
    pub items: Vec<StorageSlot>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StorageSlotWithUnits {
    pub slot: StorageSlot,
    pub units: Vec<Unit>,
}
