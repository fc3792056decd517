//! Versioned snapshots of the catalog and cart in the key-value store.
//!
//! Version 0 is the unversioned browser layout: either a bare state object or
//! a `{"state": {...}, "version": 0}` envelope. It is upgraded on load.

use crate::cart::Cart;
use crate::catalog::ProductCatalog;
use crate::db::Database;
use crate::error::{Result, StoreError};
use crate::models::{map_category_to_id, timestamp, CartItem, Category, Product};
use crate::seed;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub version: u32,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub initialized: bool,
}

impl CatalogSnapshot {
    pub fn capture(catalog: &ProductCatalog) -> Self {
        Self {
            version: SCHEMA_VERSION,
            products: catalog.products().to_vec(),
            categories: catalog.categories().to_vec(),
            initialized: catalog.is_initialized(),
        }
    }

    pub fn into_catalog(self) -> ProductCatalog {
        ProductCatalog::from_parts(self.products, self.categories, self.initialized)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub version: u32,
    pub items: Vec<CartItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyCatalogState {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    initialized: bool,
}

#[derive(Deserialize)]
struct LegacyCartState {
    #[serde(default)]
    items: Vec<CartItem>,
}

pub fn migrate_catalog(raw: Value) -> Result<CatalogSnapshot> {
    match schema_version(&raw)? {
        SCHEMA_VERSION => Ok(serde_json::from_value(raw)?),
        _ => {
            let mut state = unwrap_envelope(raw);
            fill_legacy_products(&mut state);
            let legacy: LegacyCatalogState = serde_json::from_value(state)?;
            let products = legacy
                .products
                .into_iter()
                .map(|mut product| {
                    product.category_id = map_category_to_id(&product.category);
                    product
                })
                .collect();

            let mut categories = legacy.categories;
            for default in seed::default_categories() {
                if !categories.iter().any(|c| c.id == default.id) {
                    categories.push(default);
                }
            }

            info!(from = 0, to = SCHEMA_VERSION, "Catalog snapshot migrated");
            Ok(CatalogSnapshot {
                version: SCHEMA_VERSION,
                products,
                categories,
                initialized: legacy.initialized,
            })
        }
    }
}

pub fn migrate_cart(raw: Value) -> Result<CartSnapshot> {
    match schema_version(&raw)? {
        SCHEMA_VERSION => Ok(serde_json::from_value(raw)?),
        _ => {
            let legacy: LegacyCartState = serde_json::from_value(unwrap_envelope(raw))?;
            info!(from = 0, to = SCHEMA_VERSION, "Cart snapshot migrated");
            Ok(CartSnapshot {
                version: SCHEMA_VERSION,
                items: legacy.items,
            })
        }
    }
}

pub fn load_catalog(db: &Database, key: &str) -> Result<Option<ProductCatalog>> {
    let Some(raw) = db.get(key)? else {
        return Ok(None);
    };
    let snapshot = migrate_catalog(serde_json::from_str(&raw)?)?;
    Ok(Some(snapshot.into_catalog()))
}

pub fn save_catalog(db: &Database, key: &str, catalog: &ProductCatalog) -> Result<()> {
    db.put(key, &encode_catalog(catalog)?)
}

pub fn load_cart(db: &Database, key: &str) -> Result<Option<Cart>> {
    let Some(raw) = db.get(key)? else {
        return Ok(None);
    };
    let snapshot = migrate_cart(serde_json::from_str(&raw)?)?;
    Ok(Some(Cart::from_items(snapshot.items)))
}

pub fn save_cart(db: &Database, key: &str, cart: &Cart) -> Result<()> {
    db.put(key, &encode_cart(cart)?)
}

/// Writes both snapshots atomically so a placed order never leaves the
/// decremented stock saved next to a still-full cart.
pub fn save_checkout(
    db: &Database,
    catalog_key: &str,
    catalog: &ProductCatalog,
    cart_key: &str,
    cart: &Cart,
) -> Result<()> {
    let catalog_json = encode_catalog(catalog)?;
    let cart_json = encode_cart(cart)?;
    db.put_many(&[(catalog_key, catalog_json.as_str()), (cart_key, cart_json.as_str())])
}

fn encode_catalog(catalog: &ProductCatalog) -> Result<String> {
    Ok(serde_json::to_string(&CatalogSnapshot::capture(catalog))?)
}

/// Items only; the panel's open flag is not persisted.
fn encode_cart(cart: &Cart) -> Result<String> {
    let snapshot = CartSnapshot {
        version: SCHEMA_VERSION,
        items: cart.items().to_vec(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

fn schema_version(raw: &Value) -> Result<u32> {
    let version = match raw.get("version").and_then(Value::as_u64) {
        Some(v) => u32::try_from(v).unwrap_or(u32::MAX),
        None => 0,
    };
    if version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchema(version));
    }
    Ok(version)
}

/// Browser snapshots may predate `categoryId` and the timestamps. Fill them in
/// so the products deserialize; `categoryId` is re-derived afterwards.
fn fill_legacy_products(state: &mut Value) {
    let Some(products) = state.get_mut("products").and_then(Value::as_array_mut) else {
        return;
    };
    let now = timestamp();
    for product in products.iter_mut().filter_map(Value::as_object_mut) {
        product
            .entry("categoryId")
            .or_insert_with(|| Value::String(String::new()));
        for field in ["createdAt", "updatedAt"] {
            product
                .entry(field)
                .or_insert_with(|| Value::String(now.clone()));
        }
    }
}

fn unwrap_envelope(raw: Value) -> Value {
    match raw {
        Value::Object(mut map) if map.contains_key("state") => {
            map.remove("state").unwrap_or(Value::Null)
        }
        other => other,
    }
}
