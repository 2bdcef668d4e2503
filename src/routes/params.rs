use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{SlotSize, UserRole};

#[derive(Debug, Default, Clone, Copy, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    /// Returns `(page, per_page, offset)`; page is at least 1 and per_page is
    /// clamped to `1..=100` with a default of 20. The offset saturates instead
    /// of overflowing, so an absurd page simply returns no rows.
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

// Query strings go through serde_urlencoded, which cannot deserialize numbers
// inside `#[serde(flatten)]`, so each query repeats the paging fields.

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StorageSlotQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub size: Option<SlotSize>,
    pub available: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UnitQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub storage_slot_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub role: Option<UserRole>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeliveryQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub order_id: Option<Uuid>,
}

macro_rules! impl_pagination {
    ($($query:ty),* $(,)?) => {
        $(
            impl $query {
                pub fn pagination(&self) -> Pagination {
                    Pagination {
                        page: self.page,
                        per_page: self.per_page,
                    }
                }
            }
        )*
    };
}

impl_pagination!(
    StorageSlotQuery,
    UnitQuery,
    UserListQuery,
    OrderListQuery,
    DeliveryQuery,
);
