use crate::cart::Cart;
use crate::catalog::{ProductCatalog, StockUpdate};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::{timestamp, CartItem};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub state: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    #[serde(default)]
    pub notes: String,
}

fn default_country() -> String {
    "Argentina".to_string()
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("country", &self.country),
            ("city", &self.city),
            ("address", &self.address),
            ("postalCode", &self.postal_code),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(StoreError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        if !self.email.contains('@') {
            return Err(StoreError::Validation(format!("Invalid email: {}", self.email)));
        }

        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BankTransferDetails {
    pub bank: String,
    pub cbu: String,
    pub alias: String,
    pub holder: String,
    pub cuit: String,
}

impl Default for BankTransferDetails {
    fn default() -> Self {
        Self {
            bank: "Banco Nación".to_string(),
            cbu: "0110599520000012345678".to_string(),
            alias: "AUDIOPHONES.PAGO".to_string(),
            holder: "AudioPhones SRL".to_string(),
            cuit: "30-12345678-9".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CheckoutSummary {
    pub fn for_cart(cart: &Cart, config: &StoreConfig) -> Self {
        let subtotal = cart.get_total_price();
        let shipping = config.shipping_cost as f64;
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: u32,
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
    pub customer: CheckoutForm,
    pub payment: BankTransferDetails,
    pub placed_at: String,
    /// Lines whose requested quantity exceeded the stock on hand.
    pub stock_shortfalls: Vec<StockUpdate>,
}

/// Completes a bank-transfer order: decrements stock for every line, records
/// the confirmation and empties the cart. No payment is taken.
pub fn place_order(
    catalog: &mut ProductCatalog,
    cart: &mut Cart,
    form: CheckoutForm,
    config: &StoreConfig,
) -> Result<OrderConfirmation> {
    if cart.is_empty() {
        return Err(StoreError::EmptyCart);
    }
    form.validate()?;

    let mut stock_shortfalls = Vec::new();
    for item in cart.items() {
        match catalog.update_stock(item.id, item.quantity) {
            Ok(update) if update.is_short() => stock_shortfalls.push(update),
            Ok(_) => {}
            // The product may have been deleted after it was carted.
            Err(e) if e.is_not_found() => {
                warn!(product_id = item.id, "Ordered product no longer in catalog");
            }
            Err(e) => return Err(e),
        }
    }

    let summary = CheckoutSummary::for_cart(cart, config);
    let confirmation = OrderConfirmation {
        order_number: order_number(),
        items: cart.items().to_vec(),
        subtotal: summary.subtotal,
        shipping: summary.shipping,
        total: summary.total,
        customer: form,
        payment: BankTransferDetails::default(),
        placed_at: timestamp(),
        stock_shortfalls,
    };

    send_order_email(&confirmation);
    cart.clear_cart();

    info!(
        order_number = confirmation.order_number,
        total = confirmation.total,
        lines = confirmation.items.len(),
        "Order placed"
    );
    Ok(confirmation)
}

/// Five-digit display number in 10000..110000.
fn order_number() -> u32 {
    (Uuid::new_v4().as_u128() % 100_000) as u32 + 10_000
}

/// Stand-in for the payment instructions email; logged, never delivered.
fn send_order_email(confirmation: &OrderConfirmation) {
    info!(
        to = %confirmation.customer.email,
        customer = %confirmation.customer.full_name(),
        order_number = confirmation.order_number,
        total = confirmation.total,
        alias = %confirmation.payment.alias,
        cbu = %confirmation.payment.cbu,
        "Sending order email with bank transfer details"
    );
}
