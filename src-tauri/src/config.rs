use crate::error::{Result, StoreError};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub catalog_key: String,
    pub cart_key: String,
    /// Flat shipping charge added at checkout, in store currency units.
    pub shipping_cost: u64,
    pub low_stock_threshold: u32,
    pub admin_username: String,
    pub admin_password: String,
    /// Seed the built-in demo catalog when no products are stored.
    pub seed_demo: bool,
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("audiophones_store.db"),
            catalog_key: "product-storage".to_string(),
            cart_key: "cart-storage".to_string(),
            shipping_cost: 15_000,
            low_stock_threshold: 5,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            seed_demo: true,
            log_filter: "info".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let string_var = |name: &str, default: String| env::var(name).unwrap_or(default);

        let config = Self {
            db_path: env::var("STORE_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            catalog_key: string_var("STORE_CATALOG_KEY", defaults.catalog_key),
            cart_key: string_var("STORE_CART_KEY", defaults.cart_key),
            shipping_cost: parse_var("STORE_SHIPPING_COST", defaults.shipping_cost)?,
            low_stock_threshold: parse_var("STORE_LOW_STOCK_THRESHOLD", defaults.low_stock_threshold)?,
            admin_username: string_var("STORE_ADMIN_USERNAME", defaults.admin_username),
            admin_password: string_var("STORE_ADMIN_PASSWORD", defaults.admin_password),
            seed_demo: parse_var("STORE_SEED_DEMO", defaults.seed_demo)?,
            log_filter: string_var("STORE_LOG", defaults.log_filter),
        };

        if config.catalog_key == config.cart_key {
            return Err(StoreError::Config(
                "STORE_CATALOG_KEY and STORE_CART_KEY must differ".to_string(),
            ));
        }

        tracing::info!(db_path = %config.db_path.display(), "Store configuration loaded");
        Ok(config)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| StoreError::Config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
