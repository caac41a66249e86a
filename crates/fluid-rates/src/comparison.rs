use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    breakdown::{BorrowRateBreakdown, extract_borrow_rate_breakdown},
    calc::{Benefit, benefit_difference, total_borrow_apr, total_borrow_cost},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CostInputs {
    pub principal: f64,
    pub days: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VaultCost {
    /// `None` when no vault detail was available.
    pub breakdown: Option<BorrowRateBreakdown>,
    pub total_apr: f64,
    pub total_cost: f64,
}

impl VaultCost {
    pub fn from_detail(detail: Option<&Value>, inputs: CostInputs) -> Self {
        let Some(detail) = detail else {
            return Self::default();
        };
        let breakdown = extract_borrow_rate_breakdown(detail);
        Self {
            total_apr: total_borrow_apr(&breakdown),
            total_cost: total_borrow_cost(&breakdown, inputs.principal, f64::from(inputs.days)),
            breakdown: Some(breakdown),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CostComparison {
    pub normal: VaultCost,
    pub smart: VaultCost,
    /// Saving of the smart vault over the normal one.
    pub benefit: Benefit,
}

/// Costs both sides and the saving of smart over normal. A side without
/// detail contributes a zero APR and a zero cost.
pub fn compare(normal: Option<&Value>, smart: Option<&Value>, inputs: CostInputs) -> CostComparison {
    let normal = VaultCost::from_detail(normal, inputs);
    let smart = VaultCost::from_detail(smart, inputs);
    CostComparison {
        benefit: benefit_difference(normal.total_cost, smart.total_cost),
        normal,
        smart,
    }
}
