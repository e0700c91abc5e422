//! Offer Engine
//!
//! Snapshot wrapper around the pure pricing functions. Owns one
//! already-fetched, read-only offer/category snapshot; the surrounding
//! service rebuilds it on every fetch cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Coupon, Offer, OfferScope, Product};

use super::cart::{CartLine, CartQuote, price_cart};
use super::checkout::{CouponApplication, CouponError, redeem};
use super::resolver::{Quote, resolve};

/// Offer engine - resolves offers and prices carts against one snapshot
#[derive(Debug, Clone)]
pub struct OfferEngine {
    offers: Vec<Offer>,
    categories: Vec<Category>,
}

/// Full checkout quote: priced cart plus coupon outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutQuote {
    pub cart: CartQuote,
    /// Applied coupon, if a code was given and redeemed
    pub coupon: Option<CouponApplication>,
    /// Why the given code did not apply, surfaced for display
    pub coupon_error: Option<CouponError>,
    /// Final amount due
    pub grand_total: f64,
}

impl OfferEngine {
    /// Build an engine from an already-fetched snapshot.
    ///
    /// Category-scoped offers referencing category ids absent from the
    /// snapshot are reported via `tracing::warn!`; they still evaluate
    /// normally since resolution only consults the product's category id.
    pub fn new(offers: Vec<Offer>, categories: Vec<Category>) -> Self {
        for offer in &offers {
            if let OfferScope::Category { category_ids } = &offer.scope {
                for category_id in category_ids {
                    if !categories.iter().any(|c| &c.id == category_id) {
                        tracing::warn!(
                            "Offer {} references unknown category {}",
                            offer.id,
                            category_id
                        );
                    }
                }
            }
        }

        Self { offers, categories }
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id (display helper)
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Quote a single product against the snapshot
    pub fn quote(&self, product: Option<&Product>, now: DateTime<Utc>) -> Quote {
        if product.is_none() {
            tracing::warn!("Product not found in catalog snapshot, quoting zero");
        }
        resolve(product, &self.offers, now)
    }

    /// Price a cart against the snapshot
    pub fn price_cart(&self, lines: &[CartLine], now: DateTime<Utc>) -> CartQuote {
        price_cart(lines, &self.offers, now)
    }

    /// Price a cart and apply an optional coupon code to its total.
    ///
    /// A failed redemption never fails the quote: the error is carried in
    /// the result for the storefront to display and the grand total falls
    /// back to the cart total.
    pub fn checkout(
        &self,
        lines: &[CartLine],
        coupon_code: Option<&str>,
        coupons: &[Coupon],
        now: DateTime<Utc>,
    ) -> CheckoutQuote {
        let cart = self.price_cart(lines, now);

        let (coupon, coupon_error) = match coupon_code {
            Some(code) => match redeem(code, coupons, cart.total, now) {
                Ok(application) => (Some(application), None),
                Err(err) => {
                    tracing::debug!("Coupon {} rejected: {}", code, err);
                    (None, Some(err))
                }
            },
            None => (None, None),
        };

        let grand_total = coupon.as_ref().map_or(cart.total, |c| c.total_after);

        CheckoutQuote {
            cart,
            coupon,
            coupon_error,
            grand_total,
        }
    }
}

// ==================== Tests ====================
