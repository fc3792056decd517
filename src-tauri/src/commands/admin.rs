use super::StorefrontExt;
use crate::admin::{self, DashboardStats, ProductForm, ADMIN_BADGES, ADMIN_CATEGORIES};
use crate::catalog::StockUpdate;
use crate::models::{Product, ProductPatch};
use serde::Serialize;
use tauri::AppHandle;

#[derive(Debug, Serialize)]
pub struct AdminOptions {
    pub categories: Vec<&'static str>,
    pub badges: Vec<&'static str>,
}

#[tauri::command]
pub fn admin_login(app: AppHandle, username: String, password: String) -> Result<(), String> {
    app.storefront()
        .login(&username, &password)
        .map_err(|_| "Credenciales incorrectas".to_string())
}

#[tauri::command]
pub fn admin_logout(app: AppHandle) -> Result<(), String> {
    app.storefront().logout().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn is_admin(app: AppHandle) -> Result<bool, String> {
    app.storefront().is_admin().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_admin_options() -> AdminOptions {
    AdminOptions {
        categories: ADMIN_CATEGORIES.to_vec(),
        badges: ADMIN_BADGES.iter().map(|b| b.as_str()).collect(),
    }
}

#[tauri::command]
pub fn get_admin_products(
    app: AppHandle,
    search: Option<String>,
    category: Option<String>,
) -> Result<Vec<Product>, String> {
    let storefront = app.storefront();
    match (search, category) {
        (None, None) => storefront.admin_products(),
        (search, category) => storefront.admin_search(
            search.as_deref().unwrap_or(""),
            category.as_deref().unwrap_or("all"),
        ),
    }
    .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_dashboard_stats(app: AppHandle) -> Result<DashboardStats, String> {
    app.storefront().dashboard_stats().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn create_product(app: AppHandle, form: ProductForm) -> Result<Product, String> {
    app.storefront()
        .admin_create_product(form)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn update_product(app: AppHandle, id: i64, form: ProductForm) -> Result<Product, String> {
    app.storefront()
        .admin_update_product(id, form)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn patch_product(app: AppHandle, id: i64, patch: ProductPatch) -> Result<Product, String> {
    app.storefront()
        .admin_patch_product(id, patch)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_product(app: AppHandle, id: i64) -> Result<(), String> {
    app.storefront()
        .admin_delete_product(id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn bulk_delete_products(app: AppHandle, ids: Vec<i64>) -> Result<Vec<i64>, String> {
    app.storefront()
        .admin_bulk_delete(&ids)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn adjust_stock(app: AppHandle, id: i64, quantity: u32) -> Result<StockUpdate, String> {
    app.storefront()
        .admin_update_stock(id, quantity)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn refresh_store(app: AppHandle) -> Result<u64, String> {
    app.storefront().refresh_store().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn simulate_uploads(file_names: Vec<String>) -> Vec<String> {
    let now = chrono::Utc::now().timestamp_millis();
    file_names
        .iter()
        .enumerate()
        .map(|(index, name)| admin::simulated_upload_url(name, index, now))
        .collect()
}
