use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        deliveries::DeliveryList,
        orders::{OrderList, OrderWithDeliveries},
        storage_slots::{StorageSlotList, StorageSlotWithUnits},
        units::UnitList,
        users::UserList,
    },
    models::{Delivery, Order, SlotSize, StorageSlot, Unit, User, UserRole},
    response::{ApiResponse, Meta},
    routes::{auth, deliveries, health, orders, params, storage_slots, units, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::db_health_check,
        auth::register,
        auth::login,
        storage_slots::list_storage_slots,
        storage_slots::get_storage_slot,
        units::list_units,
        units::get_unit,
        users::list_users,
        users::get_user,
        orders::list_orders,
        orders::get_order,
        deliveries::list_deliveries
    ),
    components(
        schemas(
            StorageSlot,
            Unit,
            User,
            Order,
            Delivery,
            SlotSize,
            UserRole,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            StorageSlotList,
            StorageSlotWithUnits,
            UnitList,
            UserList,
            OrderList,
            OrderWithDeliveries,
            DeliveryList,
            params::Pagination,
            params::SortOrder,
            Meta,
            ApiResponse<StorageSlotList>,
            ApiResponse<StorageSlotWithUnits>,
            ApiResponse<UnitList>,
            ApiResponse<UserList>,
            ApiResponse<OrderList>,
            ApiResponse<OrderWithDeliveries>,
            ApiResponse<DeliveryList>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Registration and login"),
        (name = "Storage Slots", description = "Rentable size and price categories"),
        (name = "Units", description = "Physical units within a storage slot"),
        (name = "Users", description = "Customer and staff accounts"),
        (name = "Orders", description = "Rental orders"),
        (name = "Deliveries", description = "Scheduled pickups and drop-offs"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
