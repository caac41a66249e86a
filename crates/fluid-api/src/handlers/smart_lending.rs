use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use fluid_client::VaultDataSource;
use fluid_types::Chain;

use crate::{AppState, dto::ApiResponse, errors::ApiError};

#[utoipa::path(
    get,
    path = "/chains/{chain_id}/smart-lending/tokens",
    tag = "Vaults",
    params(
        ("chain_id" = u64, Path, description = "EVM chain id", example = 1)
    ),
    responses(
        (status = 200, description = "Smart lending tokens, as reported by the Fluid API"),
        (status = 400, description = "Unsupported chain"),
        (status = 502, description = "Fluid API failure")
    )
)]
pub async fn list_smart_lending_tokens(
    State(state): State<AppState>,
    Path(chain_id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let chain = Chain::from_id(chain_id)?;
    let tokens = state
        .source
        .list_smart_lending_tokens(chain.id())
        .await
        .map_err(|err| {
            tracing::error!(chain_id, error = %err, "Failed to list smart lending tokens");
            ApiError::from(err)
        })?;

    Ok(Json(ApiResponse::ok(tokens)))
}
