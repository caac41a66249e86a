use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    classify::is_smart_loose,
    normalize::normalize_rate,
    value::{coerce_number, first_present, is_scalar, lookup},
};

/// Borrow APR split into its components, all in percent (`4.0` = 4% APR).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BorrowRateBreakdown {
    /// Base rate charged by the liquidity layer.
    pub liquidity_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staking_apr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dex_trading_apr: Option<f64>,
    /// Absolute vault fee (positive) or reward (negative).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_rate_adjust: Option<f64>,
}

/// Extracts the borrow rate components of a vault detail document.
///
/// Smart vaults (per [`is_smart_loose`]) report four absolute APRs that are
/// read as-is. Normal vaults report a liquidity rate and a vault fee that may
/// be encoded relative to that liquidity rate; it is converted to an absolute
/// APR so both kinds can be summed the same way.
pub fn extract_borrow_rate_breakdown(vault: &Value) -> BorrowRateBreakdown {
    if is_smart_loose(vault) {
        smart_breakdown(vault)
    } else {
        normal_breakdown(vault)
    }
}

fn smart_breakdown(vault: &Value) -> BorrowRateBreakdown {
    BorrowRateBreakdown {
        liquidity_rate: normalize_rate(lookup(vault, &["borrowRate", "liquidity", "token1"])),
        staking_apr: Some(normalize_rate(lookup(
            vault,
            &["borrowToken", "token1", "stakingApr"],
        ))),
        dex_trading_apr: Some(normalize_rate(lookup(vault, &["borrowRate", "dex", "trading"]))),
        vault_rate_adjust: Some(normalize_rate(lookup(vault, &["borrowRate", "vault", "rate"]))),
    }
}

fn normal_breakdown(vault: &Value) -> BorrowRateBreakdown {
    let liquidity_raw = first_present([
        lookup(vault, &["borrowRate", "liquidity", "token0"]),
        lookup(vault, &["borrowRate", "liquidity"]).filter(|v| is_scalar(v)),
        lookup(vault, &["exchangePricesAndRates", "borrowRateLiquidity"]),
    ]);
    let liquidity = normalize_rate(liquidity_raw);

    // rewardsOrFeeRateBorrow is a percentage of the liquidity rate
    let relative = first_present([
        lookup(vault, &["exchangePricesAndRates", "rewardsOrFeeRateBorrow"]),
        lookup(vault, &["borrowRate", "vault", "relative"]),
    ])
    .map_or(f64::NAN, coerce_number);

    let vault_rate_adjust = if relative.is_nan() {
        normalize_rate(first_present([
            lookup(vault, &["borrowRate", "vault", "feeRate"]),
            lookup(vault, &["borrowRate", "vault", "rate"]),
        ]))
    } else {
        liquidity * relative / 100.0
    };

    BorrowRateBreakdown {
        liquidity_rate: liquidity,
        staking_apr: None,
        dex_trading_apr: None,
        vault_rate_adjust: Some(vault_rate_adjust),
    }
}
