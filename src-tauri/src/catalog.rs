use crate::error::{Result, StoreError};
use crate::models::{map_category_to_id, timestamp, Category, NewProduct, Product, ProductPatch, ProductType};
use crate::seed;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Maximum number of products returned by the featured listing.
pub const FEATURED_LIMIT: usize = 8;

/// Outcome of a stock decrement. A request larger than the available stock
/// clamps to zero and reports the difference as `shortfall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub product_id: i64,
    pub requested: u32,
    pub removed: u32,
    pub remaining: u32,
    pub shortfall: u32,
}

impl StockUpdate {
    pub fn is_short(&self) -> bool {
        self.shortfall > 0
    }
}

#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    initialized: bool,
    revision: u64,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: seed::default_categories(),
            initialized: false,
            revision: 0,
        }
    }

    /// Rebuild a catalog from persisted parts. Category counts are recomputed
    /// rather than trusted.
    pub fn from_parts(products: Vec<Product>, categories: Vec<Category>, initialized: bool) -> Self {
        let mut catalog = Self {
            products,
            categories,
            initialized,
            revision: 0,
        };
        catalog.update_categories();
        catalog
    }

    /// Seeds the demo catalog when empty. No-op once initialized.
    /// Returns true when this call seeded products.
    pub fn initialize(&mut self) -> bool {
        self.initialize_with(|| seed::demo_products(&timestamp()))
    }

    pub fn initialize_with<F>(&mut self, seed: F) -> bool
    where
        F: FnOnce() -> Vec<Product>,
    {
        if self.initialized {
            return false;
        }

        let seeded = if self.products.is_empty() {
            self.products = seed();
            !self.products.is_empty()
        } else {
            false
        };

        self.initialized = true;
        self.update_categories();
        self.revision += 1;

        info!(products = self.products.len(), seeded, "Catalog initialized");
        seeded
    }

    pub fn add_product(&mut self, data: NewProduct) -> Result<Product> {
        validate_new_product(&data)?;
        let stock = check_stock(data.stock)?;

        let id = self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let now = timestamp();

        let product = Product {
            id,
            category_id: map_category_to_id(&data.category),
            name: data.name,
            description: data.description,
            price: data.price,
            original_price: data.original_price,
            stock,
            category: data.category,
            product_type: data.product_type,
            condition: data.condition,
            image: data.image,
            images: data.images,
            storage: data.storage,
            color: data.color,
            rating: data.rating,
            reviews: data.reviews,
            badge: data.badge,
            featured: data.featured,
            created_at: now.clone(),
            updated_at: now,
        };

        self.products.push(product.clone());
        self.touch();

        info!(product_id = id, name = %product.name, "Product added");
        Ok(product)
    }

    pub fn update_product(&mut self, id: i64, patch: ProductPatch) -> Result<Product> {
        let Some(index) = self.position(id) else {
            warn!(product_id = id, "Update skipped: product not found");
            return Err(StoreError::product_not_found(id));
        };

        validate_patch(&patch)?;
        let stock = patch.stock.map(check_stock).transpose()?;

        let product = &mut self.products[index];
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(original_price) = patch.original_price {
            product.original_price = original_price;
        }
        if let Some(stock) = stock {
            product.stock = stock;
        }
        if let Some(category) = patch.category {
            product.category_id = map_category_to_id(&category);
            product.category = category;
        }
        if let Some(product_type) = patch.product_type {
            product.product_type = product_type;
        }
        if let Some(condition) = patch.condition {
            product.condition = condition;
        }
        if let Some(image) = patch.image {
            product.image = image;
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(storage) = patch.storage {
            product.storage = storage;
        }
        if let Some(color) = patch.color {
            product.color = color;
        }
        if let Some(rating) = patch.rating {
            product.rating = rating;
        }
        if let Some(reviews) = patch.reviews {
            product.reviews = reviews;
        }
        if let Some(badge) = patch.badge {
            product.badge = badge;
        }
        if let Some(featured) = patch.featured {
            product.featured = featured;
        }
        product.updated_at = timestamp();

        let updated = product.clone();
        self.touch();

        info!(product_id = id, "Product updated");
        Ok(updated)
    }

    pub fn delete_product(&mut self, id: i64) -> Result<Product> {
        let Some(index) = self.position(id) else {
            warn!(product_id = id, "Delete skipped: product not found");
            return Err(StoreError::product_not_found(id));
        };

        let removed = self.products.remove(index);
        self.touch();

        info!(product_id = id, "Product deleted");
        Ok(removed)
    }

    /// Decrement stock after a purchase, floored at zero.
    pub fn update_stock(&mut self, id: i64, quantity_purchased: u32) -> Result<StockUpdate> {
        let Some(index) = self.position(id) else {
            warn!(product_id = id, "Stock update skipped: product not found");
            return Err(StoreError::product_not_found(id));
        };

        let product = &mut self.products[index];
        let removed = quantity_purchased.min(product.stock);
        product.stock -= removed;
        product.updated_at = timestamp();

        let update = StockUpdate {
            product_id: id,
            requested: quantity_purchased,
            removed,
            remaining: product.stock,
            shortfall: quantity_purchased - removed,
        };
        self.touch();

        if update.is_short() {
            warn!(
                product_id = id,
                requested = update.requested,
                shortfall = update.shortfall,
                "Insufficient stock, clamped to zero"
            );
        } else {
            info!(product_id = id, remaining = update.remaining, "Stock decremented");
        }
        Ok(update)
    }

    pub fn get_product_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn get_products_by_category(&self, category_id: &str) -> Vec<&Product> {
        self.active()
            .filter(|p| p.category_id == category_id)
            .collect()
    }

    pub fn get_products_by_type(&self, product_type: ProductType) -> Vec<&Product> {
        self.active()
            .filter(|p| p.product_type == product_type)
            .collect()
    }

    pub fn get_featured_products(&self) -> Vec<&Product> {
        self.active()
            .filter(|p| p.featured)
            .take(FEATURED_LIMIT)
            .collect()
    }

    pub fn get_active_products(&self) -> Vec<&Product> {
        self.active().collect()
    }

    /// Unfiltered listing for the admin panel, including discontinued and
    /// out-of-stock products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Bumped on every state change; presentation re-renders when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn update_categories(&mut self) {
        let products = &self.products;
        for category in &mut self.categories {
            category.product_count = products
                .iter()
                .filter(|p| p.is_active() && p.category_id == category.id)
                .count();
        }
        debug!(categories = self.categories.len(), "Category counts recomputed");
    }

    /// Re-run derived state and signal dependents without touching products.
    pub fn refresh_store(&mut self) {
        self.update_categories();
        self.initialized = true;
        self.revision += 1;
        info!(revision = self.revision, "Store refreshed");
    }

    fn active(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_active())
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    fn touch(&mut self) {
        self.update_categories();
        self.revision += 1;
    }
}

pub fn validate_new_product(data: &NewProduct) -> Result<()> {
    check_name(&data.name)?;
    check_category(&data.category)?;
    check_amount("price", data.price)?;
    if let Some(original_price) = data.original_price {
        check_amount("originalPrice", original_price)?;
    }
    check_stock(data.stock)?;
    check_rating(data.rating)
}

fn validate_patch(patch: &ProductPatch) -> Result<()> {
    if let Some(name) = &patch.name {
        check_name(name)?;
    }
    if let Some(category) = &patch.category {
        check_category(category)?;
    }
    if let Some(price) = patch.price {
        check_amount("price", price)?;
    }
    if let Some(Some(original_price)) = patch.original_price {
        check_amount("originalPrice", original_price)?;
    }
    if let Some(rating) = patch.rating {
        check_rating(rating)?;
    }
    Ok(())
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("Product name must not be empty".to_string()));
    }
    Ok(())
}

fn check_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(StoreError::Validation("Product category must not be empty".to_string()));
    }
    Ok(())
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(StoreError::Validation(format!(
            "{} must be a non-negative amount, got {}",
            field, value
        )));
    }
    Ok(())
}

fn check_stock(stock: i64) -> Result<u32> {
    u32::try_from(stock)
        .map_err(|_| StoreError::Validation(format!("stock must be a non-negative integer, got {}", stock)))
}

fn check_rating(rating: f32) -> Result<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(StoreError::Validation(format!(
            "rating must be between 0 and 5, got {}",
            rating
        )));
    }
    Ok(())
}
