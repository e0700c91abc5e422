//! Coupon Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coupon kind enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponKind {
    Percentage,
    FixedAmount,
}

/// Coupon entity: a code-redeemable discount applied at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    /// Redemption code, matched case-insensitively
    pub code: String,
    pub kind: CouponKind,
    /// Discount value (percentage: 10 = 10%, fixed: 5.00 = €5)
    pub value: f64,
    /// Minimum order total required to redeem
    pub min_order_total: Option<f64>,
    /// Valid from instant (inclusive), unbounded when absent
    pub starts_at: Option<DateTime<Utc>>,
    /// Valid until instant (inclusive), unbounded when absent
    pub ends_at: Option<DateTime<Utc>>,
    /// Maximum number of redemptions, unlimited when absent
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub usage_count: u32,
    pub is_active: bool,
}
