use rust_decimal::{Decimal, RoundingStrategy};

use crate::summary::VaultSummary;

/// Vaults offered in the "normal" selector. Falls back to every vault when
/// the chain only lists smart ones.
pub fn normal_options(summaries: &[VaultSummary]) -> Vec<&VaultSummary> {
    options_where(summaries, false)
}

/// Vaults offered in the "smart" selector, with the same fallback.
pub fn smart_options(summaries: &[VaultSummary]) -> Vec<&VaultSummary> {
    options_where(summaries, true)
}

fn options_where(summaries: &[VaultSummary], is_smart: bool) -> Vec<&VaultSummary> {
    let matching: Vec<_> = summaries.iter().filter(|v| v.is_smart == is_smart).collect();
    if matching.is_empty() {
        summaries.iter().collect()
    } else {
        matching
    }
}

pub fn vault_label(summary: &VaultSummary) -> String {
    let suffix = if summary.is_smart { " (smart)" } else { "" };
    format!("{} #{}{suffix}", summary.name, summary.id)
}

/// Display precision for APRs, costs and benefits. Ties on the exact binary
/// value round away from zero.
pub fn format_fixed2(value: f64) -> String {
    Decimal::from_f64_retain(value).map_or_else(
        || format!("{value:.2}"),
        |exact| {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(id: &str, is_smart: bool) -> VaultSummary {
        VaultSummary {
            id: id.to_string(),
            name: format!("V{id}"),
            is_smart,
            raw: json!({}),
        }
    }

    #[test]
    fn test_options_split_by_kind() {
        let all = vec![summary("1", false), summary("2", true), summary("3", false)];
        let normal: Vec<_> = normal_options(&all).iter().map(|v| v.id.as_str()).collect();
        let smart: Vec<_> = smart_options(&all).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(normal, ["1", "3"]);
        assert_eq!(smart, ["2"]);
    }

    #[test]
    fn test_options_fall_back_to_everything() {
        let only_normal = vec![summary("1", false), summary("2", false)];
        assert_eq!(smart_options(&only_normal).len(), 2);
        assert!(normal_options(&[]).is_empty());
    }

    #[test]
    fn test_vault_label() {
        assert_eq!(vault_label(&summary("7", true)), "V7 #7 (smart)");
        assert_eq!(vault_label(&summary("8", false)), "V8 #8");
    }

    #[test]
    fn test_format_fixed2() {
        assert_eq!(format_fixed2(45.205_479), "45.21");
        assert_eq!(format_fixed2(0.0), "0.00");
        assert_eq!(format_fixed2(-1.005_1), "-1.01");
        assert_eq!(format_fixed2(5.5), "5.50");
    }

    #[test]
    fn test_format_fixed2_ties_round_away_from_zero() {
        assert_eq!(format_fixed2(0.125), "0.13");
        assert_eq!(format_fixed2(1.125), "1.13");
        assert_eq!(format_fixed2(-0.125), "-0.13");
        // 1.005 is stored just below the tie
        assert_eq!(format_fixed2(1.005), "1.00");
    }

    #[test]
    fn test_format_fixed2_cost_on_a_tie() {
        let breakdown = crate::BorrowRateBreakdown {
            liquidity_rate: 12.5,
            ..Default::default()
        };
        let cost = crate::total_borrow_cost(&breakdown, 1.0, 365.0);
        assert_eq!(cost, 0.125);
        assert_eq!(format_fixed2(cost), "0.13");
    }
}
