//! Offer Matcher
//!
//! Logic for matching offers to products and checking validity windows.

use chrono::{DateTime, Utc};

use crate::models::{Offer, OfferScope, Product};

/// Check if an offer covers a product based on its scope
pub fn matches_scope(offer: &Offer, product: &Product) -> bool {
    match &offer.scope {
        OfferScope::Product { product_ids } => product_ids.iter().any(|id| id == &product.id),
        OfferScope::Category { category_ids } => {
            if let Some(category_id) = &product.category_id {
                category_ids.iter().any(|id| id == category_id)
            } else {
                false
            }
        }
    }
}

/// Check if an offer is live at the given instant.
/// Both window bounds are inclusive.
pub fn is_live(offer: &Offer, now: DateTime<Utc>) -> bool {
    offer.is_active && offer.starts_at <= now && now <= offer.ends_at
}

/// Check that the discount percentage is in the valid 0-100 range.
/// Malformed values make the offer ineligible rather than being clamped.
pub fn has_valid_discount(offer: &Offer) -> bool {
    (0.0..=100.0).contains(&offer.discount_percent)
}

/// Full eligibility test for one offer against one product
pub fn is_eligible(offer: &Offer, product: &Product, now: DateTime<Utc>) -> bool {
    is_live(offer, now) && has_valid_discount(offer) && matches_scope(offer, product)
}
