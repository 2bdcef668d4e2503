use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, seq::SliceRandom};
use serde_json::json;
use uuid::Uuid;

use crate::models::{SlotSize, UserRole};

use super::catalog::{SlotCatalog, square_feet};

pub const SEED_PASSWORD: &str = "password";
pub const DELIVERY_ADDRESS: &str = "Nairobi";

const FEATURE_SETS: [&[&str]; 3] = [
    &["Climate controlled", "24/7 access", "Ground floor"],
    &["Climate controlled", "24/7 access", "Drive-up access"],
    &[
        "Climate controlled",
        "24/7 access",
        "Ground floor",
        "Drive-up access",
        "Security cameras",
    ],
];

const ORDER_ITEMS: [&str; 10] = [
    "TV",
    "Food",
    "Furniture",
    "Clothing",
    "Electronics",
    "Books",
    "Toys",
    "Appliances",
    "Tools",
    "Sports Equipment",
];

const FIRST_NAMES: [&str; 16] = [
    "amina", "brian", "carol", "daniel", "esther", "felix", "grace", "hassan", "irene", "james",
    "kevin", "lucy", "moses", "njeri", "otieno", "wanjiru",
];

const LAST_NAMES: [&str; 12] = [
    "kamau", "odhiambo", "mwangi", "achieng", "kiptoo", "wambui", "smith", "jones", "mutua",
    "njoroge", "otieno", "chebet",
];

const EMAIL_DOMAINS: [&str; 4] = ["example.com", "example.org", "example.net", "mail.example.com"];

const STREETS: [&str; 10] = [
    "Moi Avenue",
    "Kenyatta Avenue",
    "Ngong Road",
    "Waiyaki Way",
    "Thika Road",
    "Mombasa Road",
    "Limuru Road",
    "Jogoo Road",
    "Riverside Drive",
    "Langata Road",
];

const TOWNS: [&str; 8] = [
    "Nairobi", "Kiambu", "Thika", "Machakos", "Ruiru", "Kitengela", "Ngong", "Limuru",
];

#[derive(Debug, Clone, PartialEq)]
pub struct NewSlot {
    pub id: Uuid,
    pub size: SlotSize,
    pub dimension: String,
    pub square_feet: i32,
    pub price: i64,
    pub unit_details: serde_json::Value,
    pub what_can_fit: Vec<String>,
    pub availability: bool,
}

/// Slots produced by [`generate_slots`] plus the dimensions that were skipped.
#[derive(Debug, Clone, Default)]
pub struct SlotBatch {
    pub slots: Vec<NewSlot>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUnit {
    pub id: Uuid,
    pub unit_number: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub storage_slot_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub phone_no: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub id: Uuid,
    pub user_id: Uuid,
    pub storage_slot_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub item: String,
    pub is_picked_up: bool,
    pub is_delivered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub id: Uuid,
    pub order_id: Uuid,
    pub delivery_date: DateTime<Utc>,
    pub delivery_address: String,
    pub pickup_location: String,
}

fn pick<'a, R: Rng>(rng: &mut R, items: &'a [&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

pub fn generate_slots<R: Rng>(rng: &mut R, catalog: &SlotCatalog, count: usize) -> SlotBatch {
    let mut batch = SlotBatch::default();
    for _ in 0..count {
        let Some(spec) = catalog.sizes.choose(rng) else {
            break;
        };
        let Some(dimension) = spec.dimensions.choose(rng) else {
            continue;
        };

        let square_feet = match square_feet(dimension) {
            Ok(sq) => sq,
            Err(err) => {
                tracing::warn!(error = %err, "skipping storage slot");
                batch.skipped.push(dimension.clone());
                continue;
            }
        };

        batch.slots.push(NewSlot {
            id: Uuid::new_v4(),
            size: spec.size,
            dimension: dimension.clone(),
            square_feet,
            price: rng.gen_range(50..=200),
            unit_details: json!({ "squareFeet": square_feet, "size": dimension }),
            what_can_fit: spec.what_can_fit.clone(),
            availability: true,
        });
    }
    batch
}

pub fn generate_units<R: Rng>(rng: &mut R, slots: &[NewSlot]) -> Vec<NewUnit> {
    let mut units = Vec::new();
    for slot in slots {
        let size = slot.size.as_str();
        let prefix = size.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('U');
        for i in 0..rng.gen_range(1..=5) {
            let features = FEATURE_SETS[rng.gen_range(0..FEATURE_SETS.len())];
            units.push(NewUnit {
                id: Uuid::new_v4(),
                unit_number: format!("{prefix}{}", rng.gen_range(100..=999)),
                features: features.iter().map(|f| f.to_string()).collect(),
                images: vec![format!(
                    "https://example.com/images/{size}-{}sqft-unit-{}.jpg",
                    slot.square_feet,
                    i + 1
                )],
                storage_slot_id: slot.id,
            });
        }
    }
    units
}

pub fn generate_users<R: Rng>(rng: &mut R, count: usize) -> Vec<NewUser> {
    let mut taken = HashSet::new();
    let mut users = Vec::with_capacity(count);
    for i in 0..count {
        let mut username = format!(
            "{}.{}{}",
            pick(rng, &FIRST_NAMES),
            pick(rng, &LAST_NAMES),
            rng.gen_range(1..=99)
        );
        if !taken.insert(username.clone()) {
            username = format!("{username}_{i}");
            taken.insert(username.clone());
        }
        let email = format!("{username}@{}", pick(rng, &EMAIL_DOMAINS));
        let phone_no: String = (0..8)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        let role = UserRole::ALL[rng.gen_range(0..UserRole::ALL.len())];

        users.push(NewUser {
            id: Uuid::new_v4(),
            username,
            email,
            role,
            phone_no,
            password: SEED_PASSWORD.to_string(),
        });
    }
    users
}

pub fn generate_orders<R: Rng>(
    rng: &mut R,
    user_ids: &[Uuid],
    slot_ids: &[Uuid],
    count: usize,
    now: DateTime<Utc>,
) -> Vec<NewOrder> {
    if user_ids.is_empty() || slot_ids.is_empty() {
        return Vec::new();
    }

    (0..count)
        .filter_map(|_| {
            let start_date = now - Duration::days(rng.gen_range(1..=30));
            let end_date = start_date + Duration::days(rng.gen_range(1..=30));
            let user_id = *user_ids.choose(rng)?;
            let storage_slot_id = *slot_ids.choose(rng)?;
            Some(NewOrder {
                id: Uuid::new_v4(),
                user_id,
                storage_slot_id,
                start_date,
                end_date,
                item: pick(rng, &ORDER_ITEMS).to_string(),
                is_picked_up: false,
                is_delivered: false,
            })
        })
        .collect()
}

pub fn generate_deliveries<R: Rng>(
    rng: &mut R,
    order_ids: &[Uuid],
    count: usize,
    now: DateTime<Utc>,
) -> Vec<NewDelivery> {
    (0..count)
        .map_while(|_| {
            let order_id = *order_ids.choose(rng)?;
            Some(NewDelivery {
                id: Uuid::new_v4(),
                order_id,
                delivery_date: now + Duration::days(rng.gen_range(1..=30)),
                delivery_address: DELIVERY_ADDRESS.to_string(),
                pickup_location: pickup_address(rng),
            })
        })
        .collect()
}

fn pickup_address<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {}, {} {:05}",
        rng.gen_range(1..=999),
        pick(rng, &STREETS),
        pick(rng, &TOWNS),
        rng.gen_range(100..=99999)
    )
}
