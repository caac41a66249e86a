use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use fluid_client::{VaultDataSource, list_vault_summaries};
use fluid_rates::{
    VaultSummary, extract_borrow_rate_breakdown, format_fixed2, is_smart_loose, normal_options,
    smart_options, total_borrow_apr,
};
use fluid_types::Chain;

use crate::{
    AppState,
    dto::{ApiResponse, VaultBreakdownResponse, VaultListItem, VaultListResponse},
    errors::ApiError,
};

fn option_ids(options: Vec<&VaultSummary>) -> Vec<String> {
    options.into_iter().map(|v| v.id.clone()).collect()
}

#[utoipa::path(
    get,
    path = "/chains/{chain_id}/vaults",
    tag = "Vaults",
    params(
        ("chain_id" = u64, Path, description = "EVM chain id", example = 1)
    ),
    responses(
        (status = 200, description = "Vault summaries, in Fluid API order", body = VaultListResponse),
        (status = 400, description = "Unsupported chain"),
        (status = 502, description = "Fluid API failure")
    )
)]
pub async fn list_chain_vaults(
    State(state): State<AppState>,
    Path(chain_id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let chain = Chain::from_id(chain_id)?;
    let summaries = list_vault_summaries(state.source.as_ref(), chain.id()).await?;

    let response = VaultListResponse {
        chain: chain.into(),
        items: summaries.iter().map(VaultListItem::from).collect(),
        normal_options: option_ids(normal_options(&summaries)),
        smart_options: option_ids(smart_options(&summaries)),
    };

    Ok(Json(ApiResponse::ok(response)))
}

#[utoipa::path(
    get,
    path = "/chains/{chain_id}/vaults/{vault_id}/breakdown",
    tag = "Vaults",
    params(
        ("chain_id" = u64, Path, description = "EVM chain id", example = 1),
        ("vault_id" = String, Path, description = "Fluid vault identifier")
    ),
    responses(
        (status = 200, description = "Borrow rate breakdown", body = VaultBreakdownResponse),
        (status = 400, description = "Unsupported chain"),
        (status = 404, description = "Vault not found"),
        (status = 502, description = "Fluid API failure")
    )
)]
pub async fn get_vault_breakdown(
    State(state): State<AppState>,
    Path((chain_id, vault_id)): Path<(u64, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let chain = Chain::from_id(chain_id)?;
    let detail = state
        .source
        .get_vault(chain.id(), &vault_id)
        .await
        .map_err(|err| {
            tracing::error!(chain_id, vault_id = %vault_id, error = %err, "Failed to fetch vault detail");
            ApiError::from(err)
        })?;

    let breakdown = extract_borrow_rate_breakdown(&detail);
    let total_apr = total_borrow_apr(&breakdown);
    let is_smart_structural = is_smart_loose(&detail);
    let summary = VaultSummary::from_detail(vault_id, detail);

    Ok(Json(ApiResponse::ok(VaultBreakdownResponse {
        chain: chain.into(),
        vault_id: summary.id,
        name: summary.name,
        is_smart: summary.is_smart,
        is_smart_structural,
        breakdown,
        total_apr,
        total_apr_display: format_fixed2(total_apr),
    })))
}
