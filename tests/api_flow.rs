mod common;

use rand::{SeedableRng, rngs::StdRng};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use storecenter_api::{
    config::SeedConfig,
    dto::auth::{LoginRequest, RegisterRequest},
    entity::users::ActiveModel as UserActive,
    error::AppError,
    middleware::auth::{AuthUser, decode_token},
    models::{SlotSize, UserRole},
    password::hash_password,
    routes::params::{DeliveryQuery, OrderListQuery, StorageSlotQuery, UnitQuery, UserListQuery},
    seed,
    services::{
        auth_service, delivery_service, order_service, storage_slot_service, unit_service,
        user_service,
    },
};
use uuid::Uuid;

// Seeded data is readable through the services, with role-based visibility.
#[tokio::test]
async fn register_login_and_browse_seeded_data() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };
    unsafe { std::env::set_var("JWT_SECRET", "test-secret") };

    let mut rng = StdRng::seed_from_u64(99);
    seed::run(&state.orm, &mut rng, &SeedConfig::default()).await?;

    // Register and log in a fresh client.
    let email = format!("client-{}@example.com", Uuid::new_v4());
    let registered = auth_service::register_user(
        &state,
        RegisterRequest {
            username: "new.client".into(),
            email: email.clone(),
            phone_no: "12345678".into(),
            password: "s3cret".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(registered.role, "client");

    let duplicate = auth_service::register_user(
        &state,
        RegisterRequest {
            username: "again".into(),
            email: email.clone(),
            phone_no: "12345678".into(),
            password: "s3cret".into(),
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    // Two simultaneous sign-ups for one email: exactly one wins, the other is a 400.
    let racing_email = format!("race-{}@example.com", Uuid::new_v4());
    let signup = |username: &str| RegisterRequest {
        username: username.into(),
        email: racing_email.clone(),
        phone_no: "12345678".into(),
        password: "s3cret".into(),
    };
    let (first, second) = tokio::join!(
        auth_service::register_user(&state, signup("racer.one")),
        auth_service::register_user(&state, signup("racer.two")),
    );
    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        outcomes
            .iter()
            .any(|r| matches!(r, Err(AppError::BadRequest(msg)) if msg == "Email is already taken"))
    );

    let bad_login = auth_service::login_user(
        &state,
        LoginRequest {
            email: email.clone(),
            password: "wrong".into(),
        },
    )
    .await;
    assert!(matches!(bad_login, Err(AppError::BadRequest(_))));

    let token = auth_service::login_user(
        &state,
        LoginRequest {
            email,
            password: "s3cret".into(),
        },
    )
    .await?
    .data
    .unwrap()
    .token;
    let client = decode_token(token.trim_start_matches("Bearer "))?;
    assert_eq!(client.user_id, registered.id);
    assert_eq!(client.role, UserRole::Client);

    // Public catalogue.
    let slots = storage_slot_service::list_slots(
        &state,
        StorageSlotQuery {
            per_page: Some(100),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(slots.meta.as_ref().and_then(|m| m.total), Some(50));
    let slot = &slots.data.as_ref().unwrap().items[0];

    let detail = storage_slot_service::get_slot(&state, slot.id).await?.data.unwrap();
    assert!(!detail.units.is_empty());
    assert!(detail.units.iter().all(|u| u.storage_slot_id == slot.id));

    let units = unit_service::list_units(
        &state,
        UnitQuery {
            storage_slot_id: Some(slot.id),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(units.data.unwrap().items.len(), detail.units.len());

    let small = storage_slot_service::list_slots(
        &state,
        StorageSlotQuery {
            size: Some(SlotSize::Small),
            per_page: Some(100),
            ..Default::default()
        },
    )
    .await?;
    assert!(small.data.unwrap().items.iter().all(|s| s.size == "small"));

    // A new client owns no orders and cannot see staff listings.
    let own_orders = order_service::list_orders(&state, &client, OrderListQuery::default()).await?;
    assert!(own_orders.data.unwrap().items.is_empty());
    assert!(matches!(
        user_service::list_users(&state, &client, UserListQuery::default()).await,
        Err(AppError::Forbidden)
    ));
    assert!(matches!(
        delivery_service::list_deliveries(&state, &client, DeliveryQuery::default()).await,
        Err(AppError::Forbidden)
    ));

    // Staff see everything.
    let admin = create_staff(&state).await?;
    let all_orders = order_service::list_orders(
        &state,
        &admin,
        OrderListQuery {
            per_page: Some(100),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(all_orders.meta.as_ref().and_then(|m| m.total), Some(50));
    let order = &all_orders.data.as_ref().unwrap().items[0];

    let hidden = order_service::get_order(&state, &client, order.id).await;
    assert!(matches!(hidden, Err(AppError::NotFound)));
    let visible = order_service::get_order(&state, &admin, order.id).await?.data.unwrap();
    assert!(visible.deliveries.iter().all(|d| d.order_id == order.id));

    let deliveries =
        delivery_service::list_deliveries(&state, &admin, DeliveryQuery::default()).await?;
    assert_eq!(deliveries.meta.as_ref().and_then(|m| m.total), Some(20));

    let me = user_service::get_user(&state, &client, client.user_id).await?;
    assert_eq!(me.data.unwrap().id, client.user_id);

    Ok(())
}

async fn create_staff(state: &storecenter_api::state::AppState) -> anyhow::Result<AuthUser> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        username: Set("test.admin".into()),
        email: Set(format!("admin-{}@example.com", Uuid::new_v4())),
        role: Set(UserRole::Admin.as_str().into()),
        phone_no: Set("87654321".into()),
        password_hash: Set(hash_password("admin123")?),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(AuthUser {
        user_id: user.id,
        role: UserRole::Admin,
    })
}
