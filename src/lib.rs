//! Offer Engine - best-offer resolution and discounted pricing
//!
//! # Overview
//!
//! This crate is the pricing core of the storefront. Given an
//! already-fetched snapshot of offers and categories, it determines which
//! offer applies to a product and computes the discounted price shown to
//! the customer, per cart line and at checkout.
//!
//! - **Models** (`models`): plain serde shapes for products, categories,
//!   offers, and coupons, matching the catalog API JSON
//! - **Pricing** (`pricing`): eligibility matching, best-offer selection,
//!   cart totals, coupon redemption
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── models/        # Product, Category, Offer, Coupon
//! └── pricing/       # matcher, resolver, cart, checkout, engine
//! ```
//!
//! The crate performs no I/O. Snapshots are fetched by the surrounding
//! services and handed in, and every evaluation instant is an explicit
//! parameter, so identical inputs always produce identical quotes.

pub mod models;
pub mod pricing;

// Re-export public types
pub use models::{Category, Coupon, CouponKind, Offer, OfferScope, Product};
pub use pricing::{
    AppliedOffer, CartLine, CartQuote, CheckoutQuote, CouponApplication, CouponError, LineQuote,
    OfferEngine, Quote, price_cart, redeem, resolve, resolve_now,
};
