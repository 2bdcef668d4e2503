use chrono::{DateTime, Utc};
use rand::Rng;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect, Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    entity::{
        Deliveries, Orders, StorageSlots, Units, Users, deliveries, orders, storage_slots, units,
        users,
    },
    password::hash_password,
};

use super::{
    NewSlot, NewUnit, NewUser, SeedError, SlotBatch, SlotCatalog, generate_deliveries,
    generate_orders, generate_slots, generate_units, generate_users,
};

// Keeps each multi-row INSERT well under the Postgres bind parameter limit.
const INSERT_CHUNK: usize = 1000;

/// Delete every row of the five seeded tables, children first.
pub async fn clear_all(orm: &DatabaseConnection) -> Result<(), SeedError> {
    let txn = orm.begin().await?;
    Deliveries::delete_many().exec(&txn).await?;
    Orders::delete_many().exec(&txn).await?;
    Units::delete_many().exec(&txn).await?;
    StorageSlots::delete_many().exec(&txn).await?;
    Users::delete_many().exec(&txn).await?;
    txn.commit().await?;
    Ok(())
}

pub async fn seed_storage_slots<R: Rng>(
    orm: &DatabaseConnection,
    rng: &mut R,
    catalog: &SlotCatalog,
    count: usize,
) -> Result<SlotBatch, SeedError> {
    let batch = generate_slots(rng, catalog, count);
    for dimension in &batch.skipped {
        println!("Error processing dimensions: {dimension}");
    }

    let models: Vec<storage_slots::ActiveModel> = batch
        .slots
        .iter()
        .map(|slot| storage_slots::ActiveModel {
            id: Set(slot.id),
            size: Set(slot.size.as_str().to_string()),
            square_feet: Set(slot.square_feet),
            price: Set(slot.price),
            unit_details: Set(slot.unit_details.clone()),
            what_can_fit: Set(serde_json::json!(slot.what_can_fit)),
            availability: Set(slot.availability),
            created_at: NotSet,
        })
        .collect();

    let txn = orm.begin().await?;
    for chunk in models.chunks(INSERT_CHUNK) {
        StorageSlots::insert_many(chunk.to_vec())
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;

    tracing::debug!(count = batch.slots.len(), "storage slots inserted");
    Ok(batch)
}

pub async fn seed_units<R: Rng>(
    orm: &DatabaseConnection,
    rng: &mut R,
    slots: &[NewSlot],
) -> Result<Vec<NewUnit>, SeedError> {
    let units = generate_units(rng, slots);

    let models: Vec<units::ActiveModel> = units
        .iter()
        .map(|unit| units::ActiveModel {
            id: Set(unit.id),
            unit_number: Set(unit.unit_number.clone()),
            features: Set(serde_json::json!(unit.features)),
            images: Set(serde_json::json!(unit.images)),
            storage_slot_id: Set(unit.storage_slot_id),
            created_at: NotSet,
        })
        .collect();

    let txn = orm.begin().await?;
    for chunk in models.chunks(INSERT_CHUNK) {
        Units::insert_many(chunk.to_vec())
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;

    tracing::debug!(count = units.len(), "units inserted");
    Ok(units)
}

pub async fn seed_users<R: Rng>(
    orm: &DatabaseConnection,
    rng: &mut R,
    count: usize,
) -> Result<Vec<NewUser>, SeedError> {
    let users = generate_users(rng, count);

    let mut models: Vec<users::ActiveModel> = Vec::with_capacity(users.len());
    for user in &users {
        models.push(users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            role: Set(user.role.as_str().to_string()),
            phone_no: Set(user.phone_no.clone()),
            password_hash: Set(hash_password(&user.password)?),
            created_at: NotSet,
        });
    }

    let txn = orm.begin().await?;
    for chunk in models.chunks(INSERT_CHUNK) {
        Users::insert_many(chunk.to_vec())
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;

    tracing::debug!(count = users.len(), "users inserted");
    Ok(users)
}

/// Orders draw their user and slot from whatever is currently stored.
pub async fn seed_orders<R: Rng>(
    orm: &DatabaseConnection,
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Result<usize, SeedError> {
    let user_ids: Vec<Uuid> = Users::find()
        .select_only()
        .column(users::Column::Id)
        .into_tuple()
        .all(orm)
        .await?;
    if user_ids.is_empty() {
        println!("No users found, skipping orders seeding");
        return Ok(0);
    }

    let slot_ids: Vec<Uuid> = StorageSlots::find()
        .select_only()
        .column(storage_slots::Column::Id)
        .into_tuple()
        .all(orm)
        .await?;
    if slot_ids.is_empty() {
        println!("No storage slots found, skipping orders seeding");
        return Ok(0);
    }

    let orders = generate_orders(rng, &user_ids, &slot_ids, count, now);
    let models: Vec<orders::ActiveModel> = orders
        .iter()
        .map(|order| orders::ActiveModel {
            id: Set(order.id),
            user_id: Set(order.user_id),
            storage_slot_id: Set(order.storage_slot_id),
            start_date: Set(order.start_date.into()),
            end_date: Set(order.end_date.into()),
            item: Set(order.item.clone()),
            is_picked_up: Set(order.is_picked_up),
            is_delivered: Set(order.is_delivered),
            created_at: NotSet,
        })
        .collect();

    let txn = orm.begin().await?;
    for chunk in models.chunks(INSERT_CHUNK) {
        Orders::insert_many(chunk.to_vec())
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;

    tracing::debug!(count = orders.len(), "orders inserted");
    Ok(orders.len())
}

pub async fn seed_deliveries<R: Rng>(
    orm: &DatabaseConnection,
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Result<usize, SeedError> {
    let order_ids: Vec<Uuid> = Orders::find()
        .select_only()
        .column(orders::Column::Id)
        .into_tuple()
        .all(orm)
        .await?;
    if order_ids.is_empty() {
        println!("No orders found, skipping deliveries seeding");
        return Ok(0);
    }

    let deliveries = generate_deliveries(rng, &order_ids, count, now);
    let models: Vec<deliveries::ActiveModel> = deliveries
        .iter()
        .map(|delivery| deliveries::ActiveModel {
            id: Set(delivery.id),
            order_id: Set(delivery.order_id),
            delivery_date: Set(delivery.delivery_date.into()),
            delivery_address: Set(delivery.delivery_address.clone()),
            pickup_location: Set(delivery.pickup_location.clone()),
            created_at: NotSet,
        })
        .collect();

    let txn = orm.begin().await?;
    for chunk in models.chunks(INSERT_CHUNK) {
        Deliveries::insert_many(chunk.to_vec())
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;

    tracing::debug!(count = deliveries.len(), "deliveries inserted");
    Ok(deliveries.len())
}
