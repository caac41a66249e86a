use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;

use utoipa::OpenApi as OpenApiT;
use utoipa_swagger_ui::SwaggerUi;

use crate::{AppState, handlers, proxy};

pub fn api_router<T: OpenApiT>(_state: AppState) -> Router<AppState> {
    let open_api = T::openapi();
    // Group chain-scoped calculator endpoints under a dedicated "/chains" router
    let chains_router = Router::new()
        .route("/", get(handlers::list_chains))
        .route("/{chain_id}/vaults", get(handlers::list_chain_vaults))
        .route(
            "/{chain_id}/vaults/{vault_id}/breakdown",
            get(handlers::get_vault_breakdown),
        )
        .route("/{chain_id}/compare", get(handlers::compare_vaults))
        .route(
            "/{chain_id}/smart-lending/tokens",
            get(handlers::list_smart_lending_tokens),
        );

    let relay = get(proxy::relay)
        .post(proxy::relay)
        .put(proxy::relay)
        .delete(proxy::relay)
        .patch(proxy::relay);

    Router::new()
        .route("/health", get(health))
        .nest("/v1/chains", chains_router)
        .route(&format!("{}/{{*path}}", proxy::PROXY_PREFIX), relay)
        .merge(SwaggerUi::new("/v1/docs").url("/v1/docs/openapi.json", open_api))
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
