use rand::{SeedableRng, rngs::StdRng};
use storecenter_api::{
    config::{AppConfig, SeedConfig},
    db::{create_orm_conn, create_pool, run_migrations},
    logging::init_tracing,
    seed,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("warn,storecenter_api=info");
    let config = AppConfig::from_env()?;
    let seed_config = SeedConfig::from_env();

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;
    let orm = create_orm_conn(&pool);

    let mut rng = StdRng::from_entropy();
    let report = seed::run(&orm, &mut rng, &seed_config).await?;

    println!(
        "Seeded {} storage slots, {} units, {} users, {} orders, {} deliveries",
        report.slots, report.units, report.users, report.orders, report.deliveries
    );
    Ok(())
}
