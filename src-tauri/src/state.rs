use crate::admin::{self, DashboardStats, ProductForm};
use crate::auth::{AdminSession, Authenticator, StaticCredentials};
use crate::cart::Cart;
use crate::catalog::{ProductCatalog, StockUpdate};
use crate::checkout::{self, CheckoutForm, OrderConfirmation};
use crate::config::StoreConfig;
use crate::db::Database;
use crate::error::{Result, StoreError};
use crate::models::{CartItem, Product, ProductPatch};
use crate::storage;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

/// Application root. Owns both stores, their persistence and the admin
/// session; presentation code borrows it instead of reaching for globals.
pub struct Storefront {
    config: StoreConfig,
    db: Database,
    catalog: Mutex<ProductCatalog>,
    cart: Mutex<Cart>,
    session: Mutex<AdminSession>,
    authenticator: Box<dyn Authenticator>,
}

impl Storefront {
    pub fn open(config: StoreConfig) -> Result<Self> {
        let db = Database::open(&config.db_path)?;
        Self::with_database(config, db)
    }

    pub fn in_memory(config: StoreConfig) -> Result<Self> {
        Self::with_database(config, Database::open_in_memory()?)
    }

    pub fn with_database(config: StoreConfig, db: Database) -> Result<Self> {
        let authenticator = Box::new(StaticCredentials::from_config(&config));
        Self::with_authenticator(config, db, authenticator)
    }

    pub fn with_authenticator(
        config: StoreConfig,
        db: Database,
        authenticator: Box<dyn Authenticator>,
    ) -> Result<Self> {
        db.initialize()?;
        Ok(Self {
            config,
            db,
            catalog: Mutex::new(ProductCatalog::new()),
            cart: Mutex::new(Cart::new()),
            session: Mutex::new(AdminSession::default()),
            authenticator,
        })
    }

    /// Load persisted state, then seed and mark the catalog initialized.
    /// Safe to call repeatedly.
    pub fn initialize(&self) -> Result<()> {
        {
            let mut catalog = self.lock_catalog()?;
            if !catalog.is_initialized() {
                if let Some(stored) = storage::load_catalog(&self.db, &self.config.catalog_key)? {
                    *catalog = stored;
                }
                if self.config.seed_demo {
                    catalog.initialize();
                } else {
                    catalog.initialize_with(Vec::new);
                }
                storage::save_catalog(&self.db, &self.config.catalog_key, &catalog)?;
            }
        }

        if let Some(stored) = storage::load_cart(&self.db, &self.config.cart_key)? {
            let mut cart = self.lock_cart()?;
            if cart.is_empty() {
                *cart = stored;
            }
        }

        info!("Storefront initialized");
        Ok(())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn with_catalog<R>(&self, f: impl FnOnce(&ProductCatalog) -> R) -> Result<R> {
        let catalog = self.lock_catalog()?;
        Ok(f(&catalog))
    }

    pub fn with_cart<R>(&self, f: impl FnOnce(&Cart) -> R) -> Result<R> {
        let cart = self.lock_cart()?;
        Ok(f(&cart))
    }

    /// Run a catalog mutation and persist the result when it succeeds.
    pub fn update_catalog<R>(
        &self,
        f: impl FnOnce(&mut ProductCatalog) -> Result<R>,
    ) -> Result<R> {
        let mut catalog = self.lock_catalog()?;
        let out = f(&mut catalog)?;
        storage::save_catalog(&self.db, &self.config.catalog_key, &catalog)?;
        Ok(out)
    }

    pub fn update_cart<R>(&self, f: impl FnOnce(&mut Cart) -> Result<R>) -> Result<R> {
        let mut cart = self.lock_cart()?;
        let out = f(&mut cart)?;
        storage::save_cart(&self.db, &self.config.cart_key, &cart)?;
        Ok(out)
    }

    // ===== Storefront =====

    /// Adds one unit of an active product to the cart.
    pub fn add_to_cart(&self, product_id: i64) -> Result<CartItem> {
        let product = self.with_catalog(|c| c.get_product_by_id(product_id).cloned())?;
        let product = product.ok_or_else(|| StoreError::product_not_found(product_id))?;
        if !product.is_active() {
            return Err(StoreError::Validation(format!(
                "{} is not available for purchase",
                product.name
            )));
        }

        self.update_cart(|cart| Ok(cart.add_item((&product).into()).clone()))
    }

    pub fn checkout(&self, form: CheckoutForm) -> Result<OrderConfirmation> {
        let mut catalog = self.lock_catalog()?;
        let mut cart = self.lock_cart()?;

        let confirmation = checkout::place_order(&mut catalog, &mut cart, form, &self.config)?;

        storage::save_checkout(
            &self.db,
            &self.config.catalog_key,
            &catalog,
            &self.config.cart_key,
            &cart,
        )?;
        Ok(confirmation)
    }

    // ===== Admin =====

    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        let mut session = self.lock_session()?;
        if session.login(self.authenticator.as_ref(), username, password) {
            Ok(())
        } else {
            Err(StoreError::Unauthorized)
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.lock_session()?.logout();
        Ok(())
    }

    pub fn is_admin(&self) -> Result<bool> {
        Ok(self.lock_session()?.is_authenticated())
    }

    pub fn admin_products(&self) -> Result<Vec<Product>> {
        self.require_admin()?;
        self.with_catalog(|c| c.products().to_vec())
    }

    pub fn admin_search(&self, term: &str, category: &str) -> Result<Vec<Product>> {
        self.require_admin()?;
        self.with_catalog(|c| {
            admin::search(c.products(), term, category)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.require_admin()?;
        let threshold = self.config.low_stock_threshold;
        self.with_catalog(|c| DashboardStats::compute(c.products(), threshold))
    }

    pub fn admin_create_product(&self, form: ProductForm) -> Result<Product> {
        self.require_admin()?;
        let data = form.into_new_product()?;
        self.update_catalog(|c| c.add_product(data))
    }

    pub fn admin_update_product(&self, id: i64, form: ProductForm) -> Result<Product> {
        self.require_admin()?;
        let patch = form.into_patch()?;
        self.update_catalog(|c| c.update_product(id, patch))
    }

    pub fn admin_patch_product(&self, id: i64, patch: ProductPatch) -> Result<Product> {
        self.require_admin()?;
        self.update_catalog(|c| c.update_product(id, patch))
    }

    pub fn admin_delete_product(&self, id: i64) -> Result<Product> {
        self.require_admin()?;
        self.update_catalog(|c| c.delete_product(id))
    }

    pub fn admin_bulk_delete(&self, ids: &[i64]) -> Result<Vec<i64>> {
        self.require_admin()?;
        self.update_catalog(|c| Ok(admin::bulk_delete(c, ids)))
    }

    pub fn admin_update_stock(&self, id: i64, quantity: u32) -> Result<StockUpdate> {
        self.require_admin()?;
        self.update_catalog(|c| c.update_stock(id, quantity))
    }

    pub fn refresh_store(&self) -> Result<u64> {
        self.require_admin()?;
        self.update_catalog(|c| {
            c.refresh_store();
            Ok(c.revision())
        })
    }

    fn require_admin(&self) -> Result<()> {
        if self.lock_session()?.is_authenticated() {
            Ok(())
        } else {
            Err(StoreError::Unauthorized)
        }
    }

    fn lock_catalog(&self) -> Result<MutexGuard<'_, ProductCatalog>> {
        self.catalog.lock().map_err(|_| StoreError::LockPoisoned("catalog"))
    }

    fn lock_cart(&self) -> Result<MutexGuard<'_, Cart>> {
        self.cart.lock().map_err(|_| StoreError::LockPoisoned("cart"))
    }

    fn lock_session(&self) -> Result<MutexGuard<'_, AdminSession>> {
        self.session.lock().map_err(|_| StoreError::LockPoisoned("session"))
    }
}
