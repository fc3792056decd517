use super::StorefrontExt;
use crate::cart::CartSummary;
use crate::models::CartItem;
use tauri::AppHandle;

#[tauri::command]
pub fn get_cart(app: AppHandle) -> Result<CartSummary, String> {
    app.storefront()
        .with_cart(|cart| cart.summary())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn add_to_cart(app: AppHandle, product_id: i64) -> Result<CartItem, String> {
    app.storefront()
        .add_to_cart(product_id)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn remove_cart_item(app: AppHandle, id: i64) -> Result<CartSummary, String> {
    app.storefront()
        .update_cart(|cart| {
            cart.remove_item(id)?;
            Ok(cart.summary())
        })
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn update_cart_quantity(app: AppHandle, id: i64, quantity: i64) -> Result<CartSummary, String> {
    app.storefront()
        .update_cart(|cart| {
            cart.update_quantity(id, quantity)?;
            Ok(cart.summary())
        })
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn clear_cart(app: AppHandle) -> Result<(), String> {
    app.storefront()
        .update_cart(|cart| {
            cart.clear_cart();
            Ok(())
        })
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn toggle_cart(app: AppHandle) -> Result<bool, String> {
    app.storefront()
        .update_cart(|cart| Ok(cart.toggle_cart()))
        .map_err(|e| e.to_string())
}
