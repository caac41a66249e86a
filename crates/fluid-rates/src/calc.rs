//! Borrow cost arithmetic. Linear pro-rating, no compounding.
//!
//! Nothing here validates its inputs: a `NaN` principal or duration simply
//! propagates to the result.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::breakdown::BorrowRateBreakdown;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Fraction of the principal owed over `days` at `apr_percent`.
/// A `NaN` APR counts as 0.
pub fn period_rate(apr_percent: f64, days: f64) -> f64 {
    let apr_percent = if apr_percent.is_nan() { 0.0 } else { apr_percent };
    (apr_percent / 100.0) * (days / DAYS_PER_YEAR)
}

pub fn interest_cost(principal: f64, apr_percent: f64, days: f64) -> f64 {
    principal * period_rate(apr_percent, days)
}

/// Sum of every component. Missing components count as 0.
pub fn total_borrow_apr(breakdown: &BorrowRateBreakdown) -> f64 {
    breakdown.liquidity_rate
        + breakdown.staking_apr.unwrap_or_default()
        + breakdown.dex_trading_apr.unwrap_or_default()
        + breakdown.vault_rate_adjust.unwrap_or_default()
}

pub fn total_borrow_cost(breakdown: &BorrowRateBreakdown, principal: f64, days: f64) -> f64 {
    interest_cost(principal, total_borrow_apr(breakdown), days)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Benefit {
    /// Cost saved, in the principal's currency unit. Negative when the
    /// alternative is more expensive.
    pub benefit: f64,
    /// Saving relative to the baseline cost, in percent.
    pub percent: f64,
}

/// Saving of `cost_alternative` over `cost_baseline`. The percentage is 0 when
/// the baseline cost is not positive.
pub fn benefit_difference(cost_baseline: f64, cost_alternative: f64) -> Benefit {
    let benefit = cost_baseline - cost_alternative;
    let percent = if cost_baseline > 0.0 {
        (benefit / cost_baseline) * 100.0
    } else {
        0.0
    };
    Benefit { benefit, percent }
}
