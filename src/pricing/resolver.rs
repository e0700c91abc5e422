//! Offer Resolver
//!
//! Best-applicable-offer selection and discounted price computation.
//! Uses rust_decimal for precise calculations, stores results as f64.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Offer, Product};

use super::matcher::is_eligible;
use super::money::{MAX_PRICE, to_decimal, to_f64};

// ==================== Result Types ====================

/// Offer applied to a quote (owned summary for tracking/display)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedOffer {
    pub offer_id: String,
    pub name: String,
    /// Original percentage (20 = 20%)
    pub discount_percent: f64,
    /// Calculated reduction on the unit price
    pub amount_off: f64,
}

impl AppliedOffer {
    /// Create from an Offer with the calculated amount off
    pub fn from_offer(offer: &Offer, amount_off: f64) -> Self {
        Self {
            offer_id: offer.id.clone(),
            name: offer.name.clone(),
            discount_percent: offer.discount_percent,
            amount_off,
        }
    }
}

/// Result of offer resolution for a single product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    /// Base unit price (0.0 when the product is missing or unpriced)
    pub base_price: f64,
    /// Unit price after the winning offer, rounded to 2 decimal places.
    /// Always within `0 <= final_price <= base_price`.
    pub final_price: f64,
    /// Winning offer, or `None` when no offer applies
    pub applied: Option<AppliedOffer>,
}

impl Quote {
    /// Quote at the plain base price, with no offer applied
    fn undiscounted(price: f64) -> Self {
        let price = to_f64(to_decimal(price));
        Self {
            base_price: price,
            final_price: price,
            applied: None,
        }
    }
}

// ==================== Winner Selection ====================

/// Select the eligible offer with the highest discount percentage.
/// The comparison is strictly greater, so on ties the first offer in
/// snapshot order wins.
fn best_offer<'a>(product: &Product, offers: &'a [Offer], now: DateTime<Utc>) -> Option<&'a Offer> {
    let mut winner: Option<&Offer> = None;

    for offer in offers {
        if !is_eligible(offer, product, now) {
            continue;
        }
        let beats_current = match winner {
            Some(best) => offer.discount_percent > best.discount_percent,
            None => true,
        };
        if beats_current {
            winner = Some(offer);
        }
    }

    winner
}

// ==================== Resolution ====================

/// Resolve the best applicable offer for a product and compute the
/// discounted price.
///
/// # Arguments
/// * `product` - The product to price (`None` when the catalog lookup failed)
/// * `offers` - Already-fetched offer snapshot, may be empty
/// * `now` - Evaluation instant; pass one value across a render cycle
///
/// # Returns
/// A [`Quote`] with base price, 2-decimal discounted price, and the winning
/// offer if any. Never fails: a missing product quotes as zero and malformed
/// records degrade to the undiscounted price.
pub fn resolve(product: Option<&Product>, offers: &[Offer], now: DateTime<Utc>) -> Quote {
    let Some(product) = product else {
        return Quote::undiscounted(0.0);
    };

    // Unpriced catalog rows quote as zero rather than propagating garbage
    if !product.price.is_finite() || product.price < 0.0 || product.price > MAX_PRICE {
        return Quote::undiscounted(0.0);
    }

    let Some(winner) = best_offer(product, offers, now) else {
        return Quote::undiscounted(product.price);
    };

    let base = to_decimal(product.price);
    let discount_multiplier =
        Decimal::ONE - to_decimal(winner.discount_percent) / Decimal::ONE_HUNDRED;
    let discounted = base * discount_multiplier;
    let amount_off = base - discounted;

    Quote {
        base_price: to_f64(base),
        final_price: to_f64(discounted),
        applied: Some(AppliedOffer::from_offer(winner, to_f64(amount_off))),
    }
}

/// Resolve against the current wall clock.
/// Samples `Utc::now()` once and delegates to [`resolve`].
pub fn resolve_now(product: Option<&Product>, offers: &[Offer]) -> Quote {
    resolve(product, offers, Utc::now())
}

// ==================== Tests ====================
