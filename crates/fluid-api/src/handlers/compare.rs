use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use fluid_client::VaultDataSource;
use fluid_rates::{CostInputs, compare};
use fluid_types::Chain;
use serde_json::Value;

use crate::{
    AppState,
    dto::{ApiResponse, CompareQuery, CompareResponse, VaultCostDTO},
    errors::ApiError,
};

/// A missing selection or a failed fetch both leave that side empty.
async fn fetch_selected(
    source: &dyn VaultDataSource,
    chain_id: u64,
    vault_id: Option<&str>,
) -> Option<Value> {
    let vault_id = vault_id?;
    match source.get_vault(chain_id, vault_id).await {
        Ok(detail) => Some(detail),
        Err(err) => {
            tracing::warn!(
                chain_id,
                vault_id = %vault_id,
                error = %err,
                "Failed to fetch vault detail, costing it as zero"
            );
            None
        }
    }
}

fn validate_inputs(params: &CompareQuery) -> Result<CostInputs, ApiError> {
    if !params.principal.is_finite() || params.principal < 0.0 {
        return Err(ApiError::BadRequest(
            "principal must be a non-negative number".to_string(),
        ));
    }
    if params.days < 1 {
        return Err(ApiError::BadRequest(
            "days must be an integer of at least 1".to_string(),
        ));
    }
    Ok(CostInputs {
        principal: params.principal,
        days: params.days,
    })
}

#[utoipa::path(
    get,
    path = "/chains/{chain_id}/compare",
    tag = "Calculator",
    params(
        ("chain_id" = u64, Path, description = "EVM chain id", example = 1),
        ("normal_vault_id" = Option<String>, Query, description = "Normal debt vault"),
        ("smart_vault_id" = Option<String>, Query, description = "Smart debt vault"),
        ("principal" = Option<f64>, Query, description = "Borrowed amount", example = 10000),
        ("days" = Option<u32>, Query, description = "Borrow duration in days", example = 30)
    ),
    responses(
        (status = 200, description = "Estimated APR, cost and benefit", body = CompareResponse),
        (status = 400, description = "Invalid parameters")
    )
)]
pub async fn compare_vaults(
    State(state): State<AppState>,
    Path(chain_id): Path<u64>,
    Query(params): Query<CompareQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let chain = Chain::from_id(chain_id)?;
    let inputs = validate_inputs(&params)?;

    let (normal, smart) = futures::join!(
        fetch_selected(
            state.source.as_ref(),
            chain.id(),
            params.normal_vault_id.as_deref()
        ),
        fetch_selected(
            state.source.as_ref(),
            chain.id(),
            params.smart_vault_id.as_deref()
        ),
    );

    let comparison = compare(normal.as_ref(), smart.as_ref(), inputs);

    Ok(Json(ApiResponse::ok(CompareResponse {
        chain: chain.into(),
        principal: inputs.principal,
        days: inputs.days,
        normal: VaultCostDTO::new(params.normal_vault_id, &comparison.normal),
        smart: VaultCostDTO::new(params.smart_vault_id, &comparison.smart),
        benefit: comparison.benefit.into(),
    })))
}
