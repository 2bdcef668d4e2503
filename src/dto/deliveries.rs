use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Delivery;

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryList {
    pub items: Vec<Delivery>,
}
