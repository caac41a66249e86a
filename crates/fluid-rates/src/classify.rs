//! Smart vs normal debt vault classification.
//!
//! Two predicates coexist on purpose. [`is_smart_loose`] drives the breakdown
//! extraction, [`is_smart_strict`] drives the vault list. They disagree on
//! records such as `liquidity.token1 = "0"` (loose: smart, strict: normal).

use serde_json::Value;

use crate::value::{coerce_number, is_truthy, lookup};

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

const DEX_TRADING: &[&str] = &["borrowRate", "dex", "trading"];
const LIQUIDITY_TOKEN1: &[&str] = &["borrowRate", "liquidity", "token1"];
const TOKEN1_ADDRESS: &[&str] = &["borrowToken", "token1", "address"];

/// Structural check: either the DEX trading rate or the token1 liquidity
/// rate is truthy.
pub fn is_smart_loose(vault: &Value) -> bool {
    is_truthy(lookup(vault, DEX_TRADING)) || is_truthy(lookup(vault, LIQUIDITY_TOKEN1))
}

/// A vault is smart when it earns DEX trading on the borrow side, or when it
/// has a real token1 (non-zero address) with a non-zero token1 liquidity rate.
pub fn is_smart_strict(vault: &Value) -> bool {
    has_dex_trading(vault) || (has_valid_token1(vault) && has_token1_liquidity(vault))
}

fn has_dex_trading(vault: &Value) -> bool {
    lookup(vault, DEX_TRADING).is_some_and(is_nonzero)
}

fn has_valid_token1(vault: &Value) -> bool {
    match lookup(vault, TOKEN1_ADDRESS) {
        None => false,
        Some(Value::String(address)) => !address.is_empty() && address != ZERO_ADDRESS,
        Some(_) => true,
    }
}

fn has_token1_liquidity(vault: &Value) -> bool {
    lookup(vault, LIQUIDITY_TOKEN1).is_some_and(is_nonzero)
}

// Unparseable values count as non-zero.
fn is_nonzero(value: &Value) -> bool {
    value.as_str() != Some("0") && coerce_number(value) != 0.0
}
