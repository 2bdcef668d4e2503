use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Unit;

#[derive(Debug, Serialize, ToSchema)]
pub struct UnitList {
    pub items: Vec<Unit>,
}
