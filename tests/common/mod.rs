use storecenter_api::{
    db::{create_pool, run_migrations},
    state::AppState,
};

/// Connect to the test database, or `None` when none is configured.
///
/// These tests delete every row of the seeded tables, so only the dedicated
/// `TEST_DATABASE_URL` is honoured, never the application's `DATABASE_URL`.
pub async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let Some(database_url) = test_database_url() else {
        eprintln!("Skipping test: set TEST_DATABASE_URL to run database tests.");
        return Ok(None);
    };

    let pool = create_pool(&database_url).await?;
    run_migrations(&pool).await?;
    Ok(Some(AppState::new(pool)))
}

pub fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}
