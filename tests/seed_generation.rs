use std::collections::HashSet;

use chrono::{Duration, TimeZone, Utc};
use rand::{SeedableRng, rngs::StdRng};
use storecenter_api::{
    models::SlotSize,
    seed::{
        SeedError, SizeSpec, SlotCatalog, generate_deliveries, generate_orders, generate_slots,
        generate_units, generate_users, parse_dimension, square_feet,
    },
};
use uuid::Uuid;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn parse_dimension_strips_quotes() {
    assert_eq!(parse_dimension("5'x10'").unwrap(), (5, 10));
    assert_eq!(parse_dimension("20'x25'").unwrap(), (20, 25));
    assert_eq!(square_feet("10'x15'").unwrap(), 150);
}

#[test]
fn parse_dimension_rejects_malformed_input() {
    for bad in ["10'", "10'-10'", "x10'", "5'x5'x5'", "ten'x5'", ""] {
        match parse_dimension(bad) {
            Err(SeedError::InvalidDimension(dim)) => assert_eq!(dim, bad),
            other => panic!("expected InvalidDimension for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn standard_catalog_offers_every_size() {
    let catalog = SlotCatalog::standard();
    for size in SlotSize::ALL {
        let spec = catalog
            .sizes
            .iter()
            .find(|s| s.size == size)
            .unwrap_or_else(|| panic!("no catalog entry for {size}"));
        assert_eq!(spec.dimensions.len(), 3);
        for dimension in &spec.dimensions {
            assert!(square_feet(dimension).is_ok(), "bad catalog dimension {dimension}");
        }
    }
    assert_eq!(catalog.sizes.len(), SlotSize::ALL.len());
}

#[test]
fn slot_square_feet_matches_dimension() {
    let batch = generate_slots(&mut rng(), &SlotCatalog::standard(), 50);
    assert_eq!(batch.slots.len(), 50);
    assert!(batch.skipped.is_empty());

    for slot in &batch.slots {
        let (width, length) = parse_dimension(&slot.dimension).unwrap();
        assert_eq!(slot.square_feet, width * length);
        assert_eq!(slot.unit_details["squareFeet"], slot.square_feet);
        assert_eq!(slot.unit_details["size"], slot.dimension.as_str());
        assert!((50..=200).contains(&slot.price));
        assert!(slot.availability);
        assert!(!slot.what_can_fit.is_empty());
    }
}

#[test]
fn slots_follow_their_size_catalog_entry() {
    let catalog = SlotCatalog::standard();
    let batch = generate_slots(&mut rng(), &catalog, 30);
    for slot in &batch.slots {
        let spec = catalog.sizes.iter().find(|s| s.size == slot.size).unwrap();
        assert!(spec.dimensions.contains(&slot.dimension));
        assert_eq!(slot.what_can_fit, spec.what_can_fit);
    }
}

#[test]
fn malformed_dimension_is_skipped_and_generation_continues() {
    let catalog = SlotCatalog {
        sizes: vec![
            SizeSpec::new(SlotSize::Small, &["10"], &["Boxes"]),
            SizeSpec::new(SlotSize::Large, &["20'x20'"], &["Furniture"]),
        ],
    };

    let batch = generate_slots(&mut rng(), &catalog, 40);

    assert_eq!(batch.slots.len() + batch.skipped.len(), 40);
    assert!(!batch.skipped.is_empty(), "expected some small slots to be skipped");
    assert!(!batch.slots.is_empty(), "expected large slots to survive");
    assert!(batch.skipped.iter().all(|d| d == "10"));
    assert!(batch.slots.iter().all(|s| s.size == SlotSize::Large && s.square_feet == 400));
}

#[test]
fn units_reference_generated_slots() {
    let mut rng = rng();
    let batch = generate_slots(&mut rng, &SlotCatalog::standard(), 20);
    let units = generate_units(&mut rng, &batch.slots);
    let slot_ids: HashSet<Uuid> = batch.slots.iter().map(|s| s.id).collect();

    assert!(units.len() >= batch.slots.len());
    assert!(units.len() <= batch.slots.len() * 5);

    for slot in &batch.slots {
        let owned: Vec<_> = units.iter().filter(|u| u.storage_slot_id == slot.id).collect();
        assert!((1..=5).contains(&owned.len()));
        for (i, unit) in owned.iter().enumerate() {
            let prefix = slot.size.as_str().chars().next().unwrap().to_ascii_uppercase();
            assert!(unit.unit_number.starts_with(prefix));
            let number: u32 = unit.unit_number[1..].parse().unwrap();
            assert!((100..=999).contains(&number));
            assert_eq!(
                unit.images,
                vec![format!(
                    "https://example.com/images/{}-{}sqft-unit-{}.jpg",
                    slot.size,
                    slot.square_feet,
                    i + 1
                )]
            );
            assert!(unit.features.contains(&"Climate controlled".to_string()));
        }
    }
    assert!(units.iter().all(|u| slot_ids.contains(&u.storage_slot_id)));
}

#[test]
fn users_have_unique_emails_and_eight_digit_phones() {
    let users = generate_users(&mut rng(), 200);
    assert_eq!(users.len(), 200);

    let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails.len(), users.len());

    for user in &users {
        assert_eq!(user.phone_no.len(), 8);
        assert!(user.phone_no.chars().all(|c| c.is_ascii_digit()));
        assert!(user.email.starts_with(&user.username));
        assert_eq!(user.password, "password");
    }
}

#[test]
fn orders_reference_supplied_users_and_slots() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let user_ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
    let slot_ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();

    let orders = generate_orders(&mut rng(), &user_ids, &slot_ids, 50, now);
    assert_eq!(orders.len(), 50);

    for order in &orders {
        assert!(user_ids.contains(&order.user_id));
        assert!(slot_ids.contains(&order.storage_slot_id));
        assert!(order.start_date <= now - Duration::days(1));
        assert!(order.start_date >= now - Duration::days(30));
        assert!(order.end_date >= order.start_date + Duration::days(1));
        assert!(order.end_date <= order.start_date + Duration::days(30));
        assert!(!order.is_picked_up);
        assert!(!order.is_delivered);
        assert!(!order.item.is_empty());
    }
}

#[test]
fn orders_need_users_and_slots() {
    let now = Utc::now();
    let ids = vec![Uuid::new_v4()];
    assert!(generate_orders(&mut rng(), &[], &ids, 10, now).is_empty());
    assert!(generate_orders(&mut rng(), &ids, &[], 10, now).is_empty());
}

#[test]
fn deliveries_reference_supplied_orders() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let order_ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();

    let deliveries = generate_deliveries(&mut rng(), &order_ids, 20, now);
    assert_eq!(deliveries.len(), 20);

    for delivery in &deliveries {
        assert!(order_ids.contains(&delivery.order_id));
        assert_eq!(delivery.delivery_address, "Nairobi");
        assert!(!delivery.pickup_location.is_empty());
        assert!(delivery.delivery_date >= now + Duration::days(1));
        assert!(delivery.delivery_date <= now + Duration::days(30));
    }

    assert!(generate_deliveries(&mut rng(), &[], 20, now).is_empty());
}
