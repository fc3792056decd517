//! Filtering and ordering for the storefront category pages.

use crate::models::{Badge, Condition, Product};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ListingFilter {
    #[default]
    All,
    New,
    Used,
    Sale,
}

impl ListingFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ListingFilter::All => true,
            ListingFilter::New => product.condition == Condition::Nuevo,
            ListingFilter::Used => product.condition == Condition::Usado,
            ListingFilter::Sale => product.badge == Some(Badge::Sale),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
    Name,
}

impl SortOrder {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::Featured => b.featured.cmp(&a.featured),
            SortOrder::PriceLow => a.price.total_cmp(&b.price),
            SortOrder::PriceHigh => b.price.total_cmp(&a.price),
            SortOrder::Rating => b.rating.total_cmp(&a.rating),
            // RFC 3339 timestamps in UTC order lexicographically.
            SortOrder::Newest => b.created_at.cmp(&a.created_at),
            SortOrder::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

/// Filter then sort. The sort is stable, so ties keep catalog order.
pub fn apply<'a, I>(products: I, filter: ListingFilter, sort: SortOrder) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut listed: Vec<&Product> = products
        .into_iter()
        .filter(|p| filter.matches(p))
        .collect();
    listed.sort_by(|a, b| sort.compare(a, b));
    listed
}
