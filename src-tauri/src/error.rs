use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Admin authentication required")]
    Unauthorized,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Stored data uses schema version {0}, which this build cannot read")]
    UnsupportedSchema(u32),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),
}

impl StoreError {
    pub fn product_not_found(id: i64) -> Self {
        StoreError::NotFound {
            entity: "Product",
            id: id.to_string(),
        }
    }

    pub fn cart_item_not_found(id: i64) -> Self {
        StoreError::NotFound {
            entity: "Cart item",
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
