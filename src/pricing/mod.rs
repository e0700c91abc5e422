//! Offer Resolution Module
//!
//! This module handles best-offer resolution and discounted price
//! computation for single products, carts, and checkout.

mod cart;
mod checkout;
mod engine;
pub mod matcher;
mod money;
mod resolver;

pub use cart::*;
pub use checkout::*;
pub use engine::*;
pub use matcher::*;
pub use money::*;
pub use resolver::*;
