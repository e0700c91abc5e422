//! Offer Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Offer scope: which products an offer covers.
///
/// Serialized with an `offer_type` tag and flattened into [`Offer`], so the
/// wire shape stays `{ "offer_type": "PRODUCT", "product_ids": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "offer_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferScope {
    /// Applies to an explicit set of products
    Product {
        #[serde(default)]
        product_ids: Vec<String>,
    },
    /// Applies to every product in the listed categories
    Category {
        #[serde(default)]
        category_ids: Vec<String>,
    },
}

/// Offer entity: a discount campaign active within a date window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub scope: OfferScope,
    /// Discount percentage (20 = 20% off), valid range 0-100
    pub discount_percent: f64,
    /// Valid from instant (inclusive)
    pub starts_at: DateTime<Utc>,
    /// Valid until instant (inclusive)
    pub ends_at: DateTime<Utc>,
    pub is_active: bool,
}
