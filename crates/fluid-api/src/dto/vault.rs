use fluid_rates::{
    Benefit, BorrowRateBreakdown, VaultCost, VaultSummary, format_fixed2, vault_label,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::ChainDTO;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaultListItem {
    pub id: String,
    pub name: String,
    pub is_smart: bool,
    /// Selector label, e.g. `ETH/USDC #12 (smart)`
    pub label: String,
}

impl From<&VaultSummary> for VaultListItem {
    fn from(summary: &VaultSummary) -> Self {
        Self {
            id: summary.id.clone(),
            name: summary.name.clone(),
            is_smart: summary.is_smart,
            label: vault_label(summary),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaultListResponse {
    pub chain: ChainDTO,
    pub items: Vec<VaultListItem>,
    /// Ids offered in the normal vault selector
    pub normal_options: Vec<String>,
    /// Ids offered in the smart vault selector
    pub smart_options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaultBreakdownResponse {
    pub chain: ChainDTO,
    pub vault_id: String,
    pub name: String,
    /// Classification used by the vault list
    pub is_smart: bool,
    /// Classification used to pick the breakdown extraction path
    pub is_smart_structural: bool,
    pub breakdown: BorrowRateBreakdown,
    pub total_apr: f64,
    pub total_apr_display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaultCostDTO {
    pub vault_id: Option<String>,
    /// False when no vault was selected or its detail could not be fetched
    pub available: bool,
    pub breakdown: Option<BorrowRateBreakdown>,
    pub total_apr: f64,
    pub total_apr_display: String,
    pub total_cost: f64,
    pub total_cost_display: String,
}

impl VaultCostDTO {
    pub fn new(vault_id: Option<String>, cost: &VaultCost) -> Self {
        Self {
            vault_id,
            available: cost.breakdown.is_some(),
            breakdown: cost.breakdown,
            total_apr: cost.total_apr,
            total_apr_display: format_fixed2(cost.total_apr),
            total_cost: cost.total_cost,
            total_cost_display: format_fixed2(cost.total_cost),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BenefitDTO {
    pub benefit: f64,
    pub percent: f64,
    pub benefit_display: String,
    pub percent_display: String,
}

impl From<Benefit> for BenefitDTO {
    fn from(benefit: Benefit) -> Self {
        Self {
            benefit: benefit.benefit,
            percent: benefit.percent,
            benefit_display: format_fixed2(benefit.benefit),
            percent_display: format_fixed2(benefit.percent),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompareResponse {
    pub chain: ChainDTO,
    pub principal: f64,
    pub days: u32,
    pub normal: VaultCostDTO,
    pub smart: VaultCostDTO,
    /// Saving of the smart vault over the normal one
    pub benefit: BenefitDTO,
}
