use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Delivery, Order};

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithDeliveries {
    pub order: Order,
    pub deliveries: Vec<Delivery>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
