use super::StorefrontExt;
use crate::checkout::{CheckoutForm, CheckoutSummary, OrderConfirmation};
use tauri::AppHandle;

#[tauri::command]
pub fn get_checkout_summary(app: AppHandle) -> Result<CheckoutSummary, String> {
    let storefront = app.storefront();
    storefront
        .with_cart(|cart| CheckoutSummary::for_cart(cart, storefront.config()))
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn place_order(app: AppHandle, form: CheckoutForm) -> Result<OrderConfirmation, String> {
    app.storefront().checkout(form).map_err(|e| e.to_string())
}
