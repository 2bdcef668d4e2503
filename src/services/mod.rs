pub mod auth_service;
pub mod delivery_service;
pub mod order_service;
pub mod storage_slot_service;
pub mod unit_service;
pub mod user_service;
