use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Celular,
    Computadora,
    Accesorio,
    Audio,
    Gaming,
    Smartwatch,
    Tablet,
}

impl ProductType {
    pub const ALL: [ProductType; 7] = [
        ProductType::Celular,
        ProductType::Computadora,
        ProductType::Accesorio,
        ProductType::Audio,
        ProductType::Gaming,
        ProductType::Smartwatch,
        ProductType::Tablet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Celular => "Celular",
            ProductType::Computadora => "Computadora",
            ProductType::Accesorio => "Accesorio",
            ProductType::Audio => "Audio",
            ProductType::Gaming => "Gaming",
            ProductType::Smartwatch => "Smartwatch",
            ProductType::Tablet => "Tablet",
        }
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown product type: {}", s))
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Nuevo,
    Usado,
    Descatalogado,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    New,
    Sale,
    Bestseller,
    Pro,
    Limited,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::New => "New",
            Badge::Sale => "Sale",
            Badge::Bestseller => "Bestseller",
            Badge::Pro => "Pro",
            Badge::Limited => "Limited",
        }
    }

    pub fn from_label(label: &str) -> Option<Badge> {
        match label {
            "New" => Some(Badge::New),
            "Sale" => Some(Badge::Sale),
            "Bestseller" => Some(Badge::Bestseller),
            "Pro" => Some(Badge::Pro),
            "Limited" => Some(Badge::Limited),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Smartphone,
    Watch,
    Laptop,
    Headphones,
    Camera,
    Gamepad2,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub stock: u32,
    pub category: String,
    pub category_id: String,
    pub product_type: ProductType,
    pub condition: Condition,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub rating: f32,
    pub reviews: u32,
    #[serde(
        default,
        deserialize_with = "deserialize_badge",
        skip_serializing_if = "Option::is_none"
    )]
    pub badge: Option<Badge>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Product {
    /// Visible to customers: not discontinued and in stock.
    pub fn is_active(&self) -> bool {
        self.condition != Condition::Descatalogado && self.stock > 0
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock > 0 && self.stock <= threshold
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: CategoryIcon,
    #[serde(default)]
    pub product_count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub stock: i64,
    pub category: String,
    pub product_type: ProductType,
    pub condition: Condition,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub storage: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub rating: f32,
    pub reviews: u32,
    #[serde(default, deserialize_with = "deserialize_badge")]
    pub badge: Option<Badge>,
    #[serde(default)]
    pub featured: bool,
}

/// Partial update. `Some(None)` on an optional field clears it.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub original_price: Option<Option<f64>>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub product_type: Option<ProductType>,
    pub condition: Option<Condition>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub storage: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub color: Option<Option<String>>,
    pub rating: Option<f32>,
    pub reviews: Option<u32>,
    #[serde(default, deserialize_with = "patch_badge")]
    pub badge: Option<Option<Badge>>,
    pub featured: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    /// Price captured when the item was added.
    pub price: f64,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub storage: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl From<&Product> for NewCartItem {
    fn from(product: &Product) -> Self {
        NewCartItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            storage: product.storage.clone(),
            color: product.color.clone(),
        }
    }
}

/// Slug for an admin category label. Unmapped labels are lower-cased as-is.
pub fn map_category_to_id(category: &str) -> String {
    let slug = match category {
        "iPhones" => "iphones",
        "Samsung" => "samsung",
        "Xiaomi" => "xiaomi",
        "Motorola" => "motorola",
        "MacBooks" => "macbooks",
        "Apple Watch" => "apple-watch",
        "iPads" => "ipads",
        "AirPods" => "airpods",
        "Audio" => "audio",
        "Gaming" => "gaming",
        "Smartwatchs" => "smartwatchs",
        "Accesorios" => "accesorios",
        other => return other.to_lowercase(),
    };
    slug.to_string()
}

/// ISO-8601 UTC timestamp with millisecond precision.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn deserialize_badge<'de, D>(deserializer: D) -> Result<Option<Badge>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(label) => Badge::from_label(label).map(Some).ok_or_else(|| {
            serde::de::Error::unknown_variant(label, &["New", "Sale", "Bestseller", "Pro", "Limited"])
        }),
    }
}

fn patch_badge<'de, D>(deserializer: D) -> Result<Option<Option<Badge>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_badge(deserializer).map(Some)
}

fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
