//! Cart Pricing
//!
//! Per-line offer resolution and cart totals. Every line resolves
//! independently against the same offer snapshot; line totals come from the
//! rounded unit price so receipts always show unit price times quantity.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Offer, Product};

use super::money::{to_decimal, to_f64};
use super::resolver::{AppliedOffer, resolve};

/// One cart line: a product snapshot plus quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Priced cart line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineQuote {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    /// Base unit price
    pub unit_price: f64,
    /// Unit price after the winning offer (2 decimal places)
    pub unit_final: f64,
    /// `unit_final * quantity`
    pub line_total: f64,
    /// Winning offer for this line, if any
    pub applied: Option<AppliedOffer>,
}

/// Priced cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartQuote {
    pub lines: Vec<LineQuote>,
    /// Sum of base line totals
    pub subtotal: f64,
    /// `subtotal - total`
    pub discount_total: f64,
    /// Sum of discounted line totals
    pub total: f64,
}

/// Price every cart line against the same offer snapshot.
///
/// Zero-quantity lines contribute nothing to the totals but still appear in
/// the result so the storefront can render them.
pub fn price_cart(lines: &[CartLine], offers: &[Offer], now: DateTime<Utc>) -> CartQuote {
    let mut quotes = Vec::with_capacity(lines.len());
    let mut subtotal = Decimal::ZERO;
    let mut total = Decimal::ZERO;

    for line in lines {
        let quote = resolve(Some(&line.product), offers, now);
        let quantity = Decimal::from(line.quantity);
        let line_total = to_decimal(quote.final_price) * quantity;

        subtotal += to_decimal(quote.base_price) * quantity;
        total += line_total;

        quotes.push(LineQuote {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            quantity: line.quantity,
            unit_price: quote.base_price,
            unit_final: quote.final_price,
            line_total: to_f64(line_total),
            applied: quote.applied,
        });
    }

    CartQuote {
        lines: quotes,
        subtotal: to_f64(subtotal),
        discount_total: to_f64(subtotal - total),
        total: to_f64(total),
    }
}

// ==================== Tests ====================
