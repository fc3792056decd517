pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod db;
pub mod error;
pub mod listing;
pub mod logging;
pub mod models;
pub mod seed;
pub mod state;
pub mod storage;

#[cfg(feature = "desktop")]
mod commands;


pub use cart::Cart;
pub use catalog::ProductCatalog;
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use state::Storefront;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::{admin, cart, catalog, checkout};
    use tauri::Manager;

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid store configuration: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&config.log_filter);

    tauri::Builder::default()
        .setup(move |app| {
            let mut config = config;
            if config.db_path.is_relative() {
                config.db_path = app.path().app_data_dir()?.join(&config.db_path);
            }

            let storefront = Storefront::open(config)?;
            storefront.initialize()?;
            app.manage(storefront);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog
            catalog::get_categories,
            catalog::get_product,
            catalog::get_products_by_category,
            catalog::get_products_by_type,
            catalog::get_featured_products,
            catalog::get_active_products,
            catalog::get_catalog_revision,
            // Cart
            cart::get_cart,
            cart::add_to_cart,
            cart::remove_cart_item,
            cart::update_cart_quantity,
            cart::clear_cart,
            cart::toggle_cart,
            // Checkout
            checkout::get_checkout_summary,
            checkout::place_order,
            // Admin
            admin::admin_login,
            admin::admin_logout,
            admin::is_admin,
            admin::get_admin_options,
            admin::get_admin_products,
            admin::get_dashboard_stats,
            admin::create_product,
            admin::update_product,
            admin::patch_product,
            admin::delete_product,
            admin::bulk_delete_products,
            admin::adjust_stock,
            admin::refresh_store,
            admin::simulate_uploads,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
