//! Coupon Checkout
//!
//! Coupon code validation and application against an order total.
//! Usage accounting (bumping `usage_count` once an order completes) belongs
//! to the back-office service; this module only computes.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Coupon, CouponKind};

use super::money::{to_decimal, to_f64};

/// Why a coupon code could not be redeemed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponError {
    /// No coupon with this code exists
    #[error("unknown coupon code")]
    UnknownCode,

    /// Coupon exists but has been disabled
    #[error("coupon is not active")]
    Inactive,

    /// Coupon window has not opened yet
    #[error("coupon is not valid yet")]
    NotYetStarted,

    /// Coupon window has closed
    #[error("coupon has expired")]
    Expired,

    /// Every allowed redemption has been used
    #[error("coupon usage limit reached")]
    UsageLimitReached,

    /// Order total is below the coupon minimum
    #[error("order total {total} is below the coupon minimum {minimum}")]
    MinimumNotMet { total: f64, minimum: f64 },
}

/// Result of a successful coupon redemption
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CouponApplication {
    pub coupon_id: String,
    pub code: String,
    pub kind: CouponKind,
    /// Original value (10 = 10% or €10)
    pub value: f64,
    /// Calculated amount taken off the order total
    pub amount_off: f64,
    /// Order total after the coupon, never below zero
    pub total_after: f64,
}

/// Validate a coupon code and apply it to an order total.
///
/// The code is matched ASCII case-insensitively. Checks run in order:
/// existence, active flag, validity window, usage limit, order minimum.
pub fn redeem(
    code: &str,
    coupons: &[Coupon],
    order_total: f64,
    now: DateTime<Utc>,
) -> Result<CouponApplication, CouponError> {
    let coupon = coupons
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .ok_or(CouponError::UnknownCode)?;

    validate(coupon, order_total, now)?;
    Ok(apply_coupon(coupon, order_total))
}

/// Check every redemption precondition for an already-located coupon
fn validate(coupon: &Coupon, order_total: f64, now: DateTime<Utc>) -> Result<(), CouponError> {
    if !coupon.is_active {
        return Err(CouponError::Inactive);
    }

    if let Some(starts_at) = coupon.starts_at
        && now < starts_at
    {
        return Err(CouponError::NotYetStarted);
    }

    if let Some(ends_at) = coupon.ends_at
        && now > ends_at
    {
        return Err(CouponError::Expired);
    }

    if let Some(limit) = coupon.usage_limit
        && coupon.usage_count >= limit
    {
        return Err(CouponError::UsageLimitReached);
    }

    if let Some(minimum) = coupon.min_order_total
        && order_total < minimum
    {
        return Err(CouponError::MinimumNotMet {
            total: order_total,
            minimum,
        });
    }

    Ok(())
}

/// Compute the amount off and resulting total for a valid coupon
pub fn apply_coupon(coupon: &Coupon, order_total: f64) -> CouponApplication {
    let total = to_decimal(order_total).max(Decimal::ZERO);
    let value = to_decimal(coupon.value);

    let requested = match coupon.kind {
        CouponKind::Percentage => total * value / Decimal::ONE_HUNDRED,
        CouponKind::FixedAmount => value,
    };

    // Never discount below zero or beyond the order total
    let amount_off = requested.clamp(Decimal::ZERO, total);
    let total_after = total - amount_off;

    CouponApplication {
        coupon_id: coupon.id.clone(),
        code: coupon.code.clone(),
        kind: coupon.kind.clone(),
        value: coupon.value,
        amount_off: to_f64(amount_off),
        total_after: to_f64(total_after),
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    /// Helper to create an unrestricted active coupon
    fn make_coupon(code: &str, kind: CouponKind, value: f64) -> Coupon {
        Coupon {
            id: format!("coupon_{}", code.to_lowercase()),
            code: code.to_string(),
            kind,
            value,
            min_order_total: None,
            starts_at: None,
            ends_at: None,
            usage_limit: None,
            usage_count: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_percentage_coupon() {
        // 10% of 200 = 20 off, 180 after
        let coupons = vec![make_coupon("SAVE10", CouponKind::Percentage, 10.0)];

        let applied = redeem("SAVE10", &coupons, 200.0, dt("2024-06-01T00:00:00Z")).unwrap();

        assert_eq!(applied.amount_off, 20.0);
        assert_eq!(applied.total_after, 180.0);
        assert_eq!(applied.kind, CouponKind::Percentage);
    }

    #[test]
    fn test_fixed_coupon() {
        let coupons = vec![make_coupon("TAKE5", CouponKind::FixedAmount, 5.0)];

        let applied = redeem("TAKE5", &coupons, 42.5, dt("2024-06-01T00:00:00Z")).unwrap();

        assert_eq!(applied.amount_off, 5.0);
        assert_eq!(applied.total_after, 37.5);
    }

    #[test]
    fn test_code_case_insensitive() {
        let coupons = vec![make_coupon("Welcome10", CouponKind::Percentage, 10.0)];

        let applied = redeem("WELCOME10", &coupons, 100.0, dt("2024-06-01T00:00:00Z")).unwrap();

        assert_eq!(applied.code, "Welcome10");
    }

    #[test]
    fn test_unknown_code() {
        let coupons = vec![make_coupon("SAVE10", CouponKind::Percentage, 10.0)];

        let result = redeem("NOPE", &coupons, 100.0, dt("2024-06-01T00:00:00Z"));

        assert_eq!(result, Err(CouponError::UnknownCode));
    }

    #[test]
    fn test_inactive_checked_before_window() {
        let mut coupon = make_coupon("SAVE10", CouponKind::Percentage, 10.0);
        coupon.is_active = false;
        coupon.ends_at = Some(dt("2024-01-01T00:00:00Z")); // also expired

        let result = redeem("SAVE10", &[coupon], 100.0, dt("2024-06-01T00:00:00Z"));

        assert_eq!(result, Err(CouponError::Inactive));
    }

    #[test]
    fn test_not_yet_started() {
        let mut coupon = make_coupon("SOON", CouponKind::Percentage, 10.0);
        coupon.starts_at = Some(dt("2024-07-01T00:00:00Z"));

        let result = redeem("SOON", &[coupon], 100.0, dt("2024-06-01T00:00:00Z"));

        assert_eq!(result, Err(CouponError::NotYetStarted));
    }

    #[test]
    fn test_expired_with_inclusive_bound() {
        let mut coupon = make_coupon("LATE", CouponKind::Percentage, 10.0);
        coupon.ends_at = Some(dt("2024-06-01T00:00:00Z"));

        // Exactly at ends_at still redeems
        assert!(redeem("LATE", &[coupon.clone()], 100.0, dt("2024-06-01T00:00:00Z")).is_ok());

        let result = redeem("LATE", &[coupon], 100.0, dt("2024-06-01T00:00:01Z"));
        assert_eq!(result, Err(CouponError::Expired));
    }

    #[test]
    fn test_usage_limit_reached() {
        let mut coupon = make_coupon("POPULAR", CouponKind::Percentage, 10.0);
        coupon.usage_limit = Some(100);
        coupon.usage_count = 100;

        let result = redeem("POPULAR", &[coupon.clone()], 100.0, dt("2024-06-01T00:00:00Z"));
        assert_eq!(result, Err(CouponError::UsageLimitReached));

        coupon.usage_count = 99;
        assert!(redeem("POPULAR", &[coupon], 100.0, dt("2024-06-01T00:00:00Z")).is_ok());
    }

    #[test]
    fn test_minimum_not_met() {
        let mut coupon = make_coupon("BIG", CouponKind::FixedAmount, 20.0);
        coupon.min_order_total = Some(50.0);

        let result = redeem("BIG", &[coupon.clone()], 49.99, dt("2024-06-01T00:00:00Z"));
        assert_eq!(
            result,
            Err(CouponError::MinimumNotMet {
                total: 49.99,
                minimum: 50.0,
            })
        );

        // Exactly the minimum qualifies
        assert!(redeem("BIG", &[coupon], 50.0, dt("2024-06-01T00:00:00Z")).is_ok());
    }

    #[test]
    fn test_fixed_coupon_floors_at_zero() {
        // 150 off a 100 order takes the full 100, not more
        let coupons = vec![make_coupon("HUGE", CouponKind::FixedAmount, 150.0)];

        let applied = redeem("HUGE", &coupons, 100.0, dt("2024-06-01T00:00:00Z")).unwrap();

        assert_eq!(applied.amount_off, 100.0);
        assert_eq!(applied.total_after, 0.0);
    }

    #[test]
    fn test_percentage_rounding() {
        // 15% of 33.33 = 4.9995 -> 5.00
        let coupons = vec![make_coupon("ODD", CouponKind::Percentage, 15.0)];

        let applied = redeem("ODD", &coupons, 33.33, dt("2024-06-01T00:00:00Z")).unwrap();

        assert_eq!(applied.amount_off, 5.0);
        assert_eq!(applied.total_after, 28.33);
    }
}
