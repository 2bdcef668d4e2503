use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Client,
    Employee,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Client, UserRole::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Client => "client",
            UserRole::Employee => "employee",
        }
    }

    /// Admins and employees can see every customer's records.
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Employee)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "client" => Ok(UserRole::Client),
            "employee" => Ok(UserRole::Employee),
            other => Err(format!("unknown role `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SlotSize {
    Small,
    Medium,
    Large,
}

impl SlotSize {
    pub const ALL: [SlotSize; 3] = [SlotSize::Small, SlotSize::Medium, SlotSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotSize::Small => "small",
            SlotSize::Medium => "medium",
            SlotSize::Large => "large",
        }
    }
}

impl fmt::Display for SlotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageSlot {
    pub id: Uuid,
    pub size: String,
    pub square_feet: i32,
    pub price: i64,
    #[schema(value_type = Object)]
    pub unit_details: serde_json::Value,
    pub what_can_fit: Vec<String>,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Unit {
    pub id: Uuid,
    pub unit_number: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub storage_slot_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub phone_no: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub storage_slot_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub item: String,
    pub is_picked_up: bool,
    pub is_delivered: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Delivery {
    pub id: Uuid,
    pub order_id: Uuid,
    pub delivery_date: DateTime<Utc>,
    pub delivery_address: String,
    pub pickup_location: String,
    pub created_at: DateTime<Utc>,
}

/// Reads a JSON array column back as strings; anything else is treated as empty.
pub fn string_list(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

impl From<entity::storage_slots::Model> for StorageSlot {
    fn from(model: entity::storage_slots::Model) -> Self {
        Self {
            id: model.id,
            size: model.size,
            square_feet: model.square_feet,
            price: model.price,
            unit_details: model.unit_details,
            what_can_fit: string_list(model.what_can_fit),
            availability: model.availability,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::units::Model> for Unit {
    fn from(model: entity::units::Model) -> Self {
        Self {
            id: model.id,
            unit_number: model.unit_number,
            features: string_list(model.features),
            images: string_list(model.images),
            storage_slot_id: model.storage_slot_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::users::Model> for User {
    fn from(model: entity::users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            role: model.role,
            phone_no: model.phone_no,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::orders::Model> for Order {
    fn from(model: entity::orders::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            storage_slot_id: model.storage_slot_id,
            start_date: model.start_date.with_timezone(&Utc),
            end_date: model.end_date.with_timezone(&Utc),
            item: model.item,
            is_picked_up: model.is_picked_up,
            is_delivered: model.is_delivered,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::deliveries::Model> for Delivery {
    fn from(model: entity::deliveries::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            delivery_date: model.delivery_date.with_timezone(&Utc),
            delivery_address: model.delivery_address,
            pickup_location: model.pickup_location,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
