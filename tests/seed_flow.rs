mod common;

use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};
use sea_orm::{EntityTrait, PaginatorTrait};
use storecenter_api::{
    config::SeedConfig,
    entity::{Deliveries, Orders, StorageSlots, Units, Users},
    password::verify_password,
    seed,
};
use uuid::Uuid;

// One test so the table-clearing steps never race each other.
#[tokio::test]
async fn seed_run_clears_and_links_every_record_kind() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };
    let orm = &state.orm;
    let config = SeedConfig {
        slots: 8,
        users: 6,
        orders: 10,
        deliveries: 4,
    };

    for round in 0..2u64 {
        let mut rng = StdRng::seed_from_u64(round);
        let report = seed::run(orm, &mut rng, &config).await?;

        assert_eq!(report.slots, 8);
        assert_eq!(report.skipped_slots, 0);
        assert_eq!(report.users, 6);
        assert_eq!(report.orders, 10);
        assert_eq!(report.deliveries, 4);

        // The previous round's rows are gone.
        assert_eq!(StorageSlots::find().count(orm).await?, 8);
        assert_eq!(Units::find().count(orm).await? as usize, report.units);
        assert_eq!(Users::find().count(orm).await?, 6);
        assert_eq!(Orders::find().count(orm).await?, 10);
        assert_eq!(Deliveries::find().count(orm).await?, 4);

        let slots = StorageSlots::find().all(orm).await?;
        let slot_ids: HashSet<Uuid> = slots.iter().map(|s| s.id).collect();
        let users = Users::find().all(orm).await?;
        let user_ids: HashSet<Uuid> = users.iter().map(|u| u.id).collect();
        let orders = Orders::find().all(orm).await?;
        let order_ids: HashSet<Uuid> = orders.iter().map(|o| o.id).collect();

        for unit in Units::find().all(orm).await? {
            assert!(slot_ids.contains(&unit.storage_slot_id));
        }
        for order in &orders {
            assert!(user_ids.contains(&order.user_id));
            assert!(slot_ids.contains(&order.storage_slot_id));
        }
        for delivery in Deliveries::find().all(orm).await? {
            assert!(order_ids.contains(&delivery.order_id));
        }

        let user = &users[0];
        assert_ne!(user.password_hash, "password");
        assert!(verify_password("password", &user.password_hash)?);
    }

    // Orders and deliveries are skipped when their parents are missing.
    let mut rng = StdRng::seed_from_u64(7);

    seed::clear_all(orm).await?;
    seed::seed_storage_slots(orm, &mut rng, &seed::SlotCatalog::standard(), 3).await?;

    let now = chrono::Utc::now();
    assert_eq!(seed::seed_orders(orm, &mut rng, 5, now).await?, 0);
    assert_eq!(seed::seed_deliveries(orm, &mut rng, 5, now).await?, 0);
    assert_eq!(Orders::find().count(orm).await?, 0);

    Ok(())
}
