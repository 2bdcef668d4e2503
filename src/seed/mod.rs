//! Synthetic data for the storage rental domain.
//!
//! Generation (`generate`) is pure and driven by an explicit RNG; `persist`
//! writes each record kind in its own transaction. [`run`] clears every table
//! and repopulates them in dependency order.

pub mod catalog;
pub mod generate;
pub mod persist;

use chrono::Utc;
use rand::Rng;
use sea_orm::DatabaseConnection;
use thiserror::Error;

use crate::{config::SeedConfig, error::AppError};

pub use catalog::{SizeSpec, SlotCatalog, parse_dimension, square_feet};
pub use generate::{
    NewDelivery, NewOrder, NewSlot, NewUnit, NewUser, SlotBatch, generate_deliveries,
    generate_orders, generate_slots, generate_units, generate_users,
};
pub use persist::{
    clear_all, seed_deliveries, seed_orders, seed_storage_slots, seed_units, seed_users,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Error processing dimensions: {0}")]
    InvalidDimension(String),

    #[error("ORM error: {0}")]
    Orm(#[from] sea_orm::DbErr),

    #[error("password hashing failed: {0}")]
    Password(#[from] AppError),
}

/// Row counts written by one seed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub slots: usize,
    pub skipped_slots: usize,
    pub units: usize,
    pub users: usize,
    pub orders: usize,
    pub deliveries: usize,
}

pub async fn run<R: Rng>(
    orm: &DatabaseConnection,
    rng: &mut R,
    config: &SeedConfig,
) -> Result<SeedReport, SeedError> {
    println!("Clearing db...");
    clear_all(orm).await?;

    println!("Starting seed...");
    println!("Seeding storage slots...");
    let batch = seed_storage_slots(orm, rng, &SlotCatalog::standard(), config.slots).await?;

    println!("Seeding units...");
    let units = seed_units(orm, rng, &batch.slots).await?;

    println!("Seeding users...");
    let users = seed_users(orm, rng, config.users).await?;

    let now = Utc::now();
    println!("Seeding orders...");
    let orders = seed_orders(orm, rng, config.orders, now).await?;

    println!("Seeding deliveries...");
    let deliveries = seed_deliveries(orm, rng, config.deliveries, now).await?;

    let report = SeedReport {
        slots: batch.slots.len(),
        skipped_slots: batch.skipped.len(),
        units: units.len(),
        users: users.len(),
        orders,
        deliveries,
    };
    tracing::info!(?report, "seed finished");
    println!("Seed completed successfully!");
    Ok(report)
}
