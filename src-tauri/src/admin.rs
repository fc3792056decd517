use crate::catalog::ProductCatalog;
use crate::error::{Result, StoreError};
use crate::models::{Badge, Condition, NewProduct, Product, ProductPatch, ProductType};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const ADMIN_CATEGORIES: [&str; 12] = [
    "iPhones",
    "Samsung",
    "Xiaomi",
    "Motorola",
    "MacBooks",
    "Apple Watch",
    "iPads",
    "AirPods",
    "Audio",
    "Gaming",
    "Smartwatchs",
    "Accesorios",
];

pub const ADMIN_BADGES: [Badge; 5] = [
    Badge::New,
    Badge::Sale,
    Badge::Bestseller,
    Badge::Pro,
    Badge::Limited,
];

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=300";

/// Stock level the revenue estimate measures sales against.
const REVENUE_BASELINE_UNITS: u32 = 100;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub estimated_revenue: f64,
    pub low_stock: usize,
    pub featured_products: usize,
}

impl DashboardStats {
    pub fn compute(products: &[Product], low_stock_threshold: u32) -> Self {
        Self {
            total_products: products.len(),
            estimated_revenue: products
                .iter()
                .map(|p| p.price * f64::from(REVENUE_BASELINE_UNITS.saturating_sub(p.stock)))
                .sum(),
            low_stock: products
                .iter()
                .filter(|p| p.stock <= low_stock_threshold)
                .count(),
            featured_products: products.iter().filter(|p| p.featured).count(),
        }
    }
}

/// Admin table search. `category` is an admin label, or "all".
pub fn search<'a>(products: &'a [Product], term: &str, category: &str) -> Vec<&'a Product> {
    let term = term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            let matches_term = p.name.to_lowercase().contains(&term)
                || p.category.to_lowercase().contains(&term);
            let matches_category = category == "all" || p.category == category;
            matches_term && matches_category
        })
        .collect()
}

pub fn product_type_for_category(category: &str) -> ProductType {
    match category {
        "iPhones" | "Samsung" | "Xiaomi" | "Motorola" => ProductType::Celular,
        "MacBooks" => ProductType::Computadora,
        "iPads" => ProductType::Tablet,
        "AirPods" | "Audio" => ProductType::Audio,
        "Apple Watch" | "Smartwatchs" => ProductType::Smartwatch,
        "Gaming" => ProductType::Gaming,
        _ => ProductType::Accesorio,
    }
}

/// Path an uploaded file would be served from. No bytes are stored.
pub fn simulated_upload_url(file_name: &str, index: usize, timestamp_ms: i64) -> String {
    // Every whitespace run becomes one "-", including leading and trailing runs.
    let mut slug = String::with_capacity(file_name.len());
    let mut in_run = false;
    for ch in file_name.chars() {
        if ch.is_whitespace() {
            if !in_run {
                slug.push('-');
            }
            in_run = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_run = false;
        }
    }
    format!("/uploads/{}-{}-{}", timestamp_ms, index, slug)
}

/// Deletes each id present; returns the ids that were removed.
pub fn bulk_delete(catalog: &mut ProductCatalog, ids: &[i64]) -> Vec<i64> {
    let removed: Vec<i64> = ids
        .iter()
        .filter_map(|id| catalog.delete_product(*id).ok().map(|p| p.id))
        .collect();
    info!(requested = ids.len(), removed = removed.len(), "Bulk delete finished");
    removed
}

/// Raw admin form input; numeric fields arrive as text.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub description: String,
    pub stock: String,
    #[serde(default = "default_rating")]
    pub rating: String,
    #[serde(default = "default_reviews")]
    pub reviews: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_rating() -> String {
    "4.5".to_string()
}

fn default_reviews() -> String {
    "0".to_string()
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: String::new(),
            original_price: String::new(),
            description: String::new(),
            stock: String::new(),
            rating: default_rating(),
            reviews: default_reviews(),
            badge: String::new(),
            featured: false,
            images: Vec::new(),
        }
    }
}

impl ProductForm {
    /// Prefill for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        let images = if product.images.is_empty() {
            vec![product.image.clone()]
        } else {
            product.images.clone()
        };

        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            original_price: product.original_price.map(|p| p.to_string()).unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            stock: product.stock.to_string(),
            rating: product.rating.to_string(),
            reviews: product.reviews.to_string(),
            badge: product.badge.map(|b| b.as_str().to_string()).unwrap_or_default(),
            featured: product.featured,
            images,
        }
    }

    pub fn into_new_product(self) -> Result<NewProduct> {
        let parsed = self.parse()?;
        Ok(NewProduct {
            product_type: product_type_for_category(&self.category),
            name: self.name,
            description: parsed.description,
            price: parsed.price,
            original_price: parsed.original_price,
            stock: parsed.stock,
            category: self.category,
            condition: Condition::Nuevo,
            image: parsed.image,
            images: parsed.images,
            storage: None,
            color: None,
            rating: parsed.rating,
            reviews: parsed.reviews,
            badge: parsed.badge,
            featured: self.featured,
        })
    }

    /// Patch carrying every form field. Condition is left untouched so editing
    /// does not revive a discontinued product.
    pub fn into_patch(self) -> Result<ProductPatch> {
        let parsed = self.parse()?;
        Ok(ProductPatch {
            product_type: Some(product_type_for_category(&self.category)),
            name: Some(self.name),
            description: Some(parsed.description),
            price: Some(parsed.price),
            original_price: Some(parsed.original_price),
            stock: Some(parsed.stock),
            category: Some(self.category),
            image: Some(parsed.image),
            images: Some(parsed.images),
            rating: Some(parsed.rating),
            reviews: Some(parsed.reviews),
            badge: Some(parsed.badge),
            featured: Some(self.featured),
            ..ProductPatch::default()
        })
    }

    fn parse(&self) -> Result<ParsedForm> {
        let original_price = match self.original_price.trim() {
            "" => None,
            raw => Some(parse_field::<f64>("originalPrice", raw)?),
        };
        let badge = match self.badge.trim() {
            "" => None,
            raw => Some(
                Badge::from_label(raw)
                    .ok_or_else(|| StoreError::Validation(format!("Unknown badge: {}", raw)))?,
            ),
        };
        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        let images = if self.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            self.images.clone()
        };

        Ok(ParsedForm {
            price: parse_field("price", &self.price)?,
            original_price,
            stock: parse_field("stock", &self.stock)?,
            rating: parse_field("rating", &self.rating)?,
            reviews: parse_field("reviews", &self.reviews)?,
            badge,
            description,
            image: images[0].clone(),
            images,
        })
    }
}

struct ParsedForm {
    price: f64,
    original_price: Option<f64>,
    stock: i64,
    rating: f32,
    reviews: u32,
    badge: Option<Badge>,
    description: Option<String>,
    image: String,
    images: Vec<String>,
}

fn parse_field<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| StoreError::Validation(format!("{} is not a valid number: {:?}", field, raw)))
}
