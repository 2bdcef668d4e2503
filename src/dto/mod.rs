pub mod auth;
pub mod deliveries;
pub mod orders;
pub mod storage_slots;
pub mod units;
pub mod users;
