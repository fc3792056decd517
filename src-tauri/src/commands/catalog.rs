use super::StorefrontExt;
use crate::listing::{self, ListingFilter, SortOrder};
use crate::models::{Category, Product, ProductType};
use tauri::AppHandle;

#[tauri::command]
pub fn get_categories(app: AppHandle) -> Result<Vec<Category>, String> {
    app.storefront()
        .with_catalog(|c| c.categories().to_vec())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_product(app: AppHandle, id: i64) -> Result<Option<Product>, String> {
    app.storefront()
        .with_catalog(|c| c.get_product_by_id(id).cloned())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_products_by_category(
    app: AppHandle,
    category_id: String,
    filter: Option<ListingFilter>,
    sort: Option<SortOrder>,
) -> Result<Vec<Product>, String> {
    app.storefront()
        .with_catalog(|c| {
            listing::apply(
                c.get_products_by_category(&category_id),
                filter.unwrap_or_default(),
                sort.unwrap_or_default(),
            )
            .into_iter()
            .cloned()
            .collect()
        })
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_products_by_type(app: AppHandle, product_type: String) -> Result<Vec<Product>, String> {
    let product_type: ProductType = product_type.parse()?;

    app.storefront()
        .with_catalog(|c| c.get_products_by_type(product_type).into_iter().cloned().collect())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_featured_products(app: AppHandle) -> Result<Vec<Product>, String> {
    app.storefront()
        .with_catalog(|c| c.get_featured_products().into_iter().cloned().collect())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_active_products(app: AppHandle) -> Result<Vec<Product>, String> {
    app.storefront()
        .with_catalog(|c| c.get_active_products().into_iter().cloned().collect())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_catalog_revision(app: AppHandle) -> Result<u64, String> {
    app.storefront()
        .with_catalog(|c| c.revision())
        .map_err(|e| e.to_string())
}
