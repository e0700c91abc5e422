//! Data models
//!
//! Plain serde shapes matching the JSON the catalog/offer endpoints return.
//! All IDs are opaque `String`s assigned upstream.

pub mod coupon;
pub mod offer;
pub mod product;

// Re-exports
pub use coupon::*;
pub use offer::*;
pub use product::*;
