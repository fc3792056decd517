pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;

use crate::state::Storefront;
use tauri::{AppHandle, Manager};

pub trait StorefrontExt {
    fn storefront(&self) -> &Storefront;
}

impl StorefrontExt for AppHandle {
    fn storefront(&self) -> &Storefront {
        self.state::<Storefront>().inner()
    }
}
