use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

/// How many records of each kind the seed program generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    pub slots: usize,
    pub users: usize,
    pub orders: usize,
    pub deliveries: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            slots: 50,
            users: 50,
            orders: 50,
            deliveries: 20,
        }
    }
}

impl SeedConfig {
    /// Defaults, overridden by `SEED_SLOTS`, `SEED_USERS`, `SEED_ORDERS` and
    /// `SEED_DELIVERIES` when they hold a valid count.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            slots: count_from_env("SEED_SLOTS").unwrap_or(defaults.slots),
            users: count_from_env("SEED_USERS").unwrap_or(defaults.users),
            orders: count_from_env("SEED_ORDERS").unwrap_or(defaults.orders),
            deliveries: count_from_env("SEED_DELIVERIES").unwrap_or(defaults.deliveries),
        }
    }
}

fn count_from_env(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|v| v.trim().parse::<usize>().ok())
}
