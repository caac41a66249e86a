use axum::{Json, response::IntoResponse};
use fluid_types::Chain;

use crate::dto::{ApiResponse, ChainDTO, ChainListResponse};

#[utoipa::path(
    get,
    path = "/chains",
    tag = "Chains",
    responses(
        (status = 200, description = "Chains supported by the calculator", body = ChainListResponse)
    )
)]
pub async fn list_chains() -> impl IntoResponse {
    let items = Chain::all().into_iter().map(ChainDTO::from).collect();
    Json(ApiResponse::ok(ChainListResponse { items }))
}
