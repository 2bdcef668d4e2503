pub mod deliveries;
pub mod orders;
pub mod storage_slots;
pub mod units;
pub mod users;

pub use deliveries::Entity as Deliveries;
pub use orders::Entity as Orders;
pub use storage_slots::Entity as StorageSlots;
pub use units::Entity as Units;
pub use users::Entity as Users;
