use crate::error::{Result, StoreError};
use crate::models::{CartItem, NewCartItem};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub items: Vec<CartItem>,
    pub is_open: bool,
    pub total_items: u32,
    pub total_price: f64,
}

/// Line items in insertion order plus the side panel visibility flag.
/// Performs no stock validation; callers check availability first.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    is_open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self {
            items: items.into_iter().filter(|item| item.quantity > 0).collect(),
            is_open: false,
        }
    }

    /// Adds one unit. Identity is the product id alone; an existing line keeps
    /// its captured price and attributes.
    pub fn add_item(&mut self, item: NewCartItem) -> &CartItem {
        let index = match self.items.iter().position(|i| i.id == item.id) {
            Some(index) => {
                let line = &mut self.items[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(CartItem {
                    id: item.id,
                    name: item.name,
                    price: item.price,
                    image: item.image,
                    category: item.category,
                    storage: item.storage,
                    color: item.color,
                    quantity: 1,
                });
                self.items.len() - 1
            }
        };

        let line = &self.items[index];
        info!(product_id = line.id, quantity = line.quantity, "Cart item added");
        line
    }

    pub fn remove_item(&mut self, id: i64) -> Result<CartItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StoreError::cart_item_not_found(id))?;

        let removed = self.items.remove(index);
        info!(product_id = id, "Cart item removed");
        Ok(removed)
    }

    /// Zero or negative quantities remove the line.
    pub fn update_quantity(&mut self, id: i64, quantity: i64) -> Result<Option<&CartItem>> {
        if quantity <= 0 {
            self.remove_item(id)?;
            return Ok(None);
        }

        let quantity = u32::try_from(quantity)
            .map_err(|_| StoreError::Validation(format!("quantity {} is too large", quantity)))?;

        let line = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::cart_item_not_found(id))?;
        line.quantity = quantity;

        debug!(product_id = id, quantity, "Cart quantity updated");
        Ok(Some(&*line))
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
        info!("Cart cleared");
    }

    pub fn toggle_cart(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn quantity_of(&self, id: i64) -> u32 {
        self.items
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Saturates at `u32::MAX`.
    pub fn get_total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, i| total.saturating_add(i.quantity))
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            is_open: self.is_open,
            total_items: self.get_total_items(),
            total_price: self.get_total_price(),
        }
    }

    /// Uses the prices captured at add time.
    pub fn get_total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
