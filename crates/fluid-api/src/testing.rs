//! In-process stand-in for the Fluid API, served on an ephemeral port.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, RawQuery},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{any, get},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

use fluid_client::FluidApiClient;
use fluid_metrics::MetricsRegistry;

use crate::{AppState, ProxyState, app, proxy::proxy_http_client};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

fn normal_vault() -> Value {
    json!({
        "id": 1,
        "name": "ETH/USDC",
        "borrowRate": {
            "liquidity": { "token0": "500" },
            "vault": { "feeRate": "3" }
        },
        "exchangePricesAndRates": { "rewardsOrFeeRateBorrow": "10" },
        "borrowToken": { "token0": { "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48" } }
    })
}

fn smart_vault() -> Value {
    json!({
        "id": 3,
        "name": "wstETH-ETH/USDC-USDT",
        "borrowRate": {
            "liquidity": { "token0": "380", "token1": "400" },
            "dex": { "trading": "50" },
            "vault": { "rate": "-0.3" }
        },
        "borrowToken": {
            "token1": {
                "address": "0xdAC17F958D2ee523a2206206994597C13D831ec7",
                "stakingApr": "0"
            }
        }
    })
}

async fn vault_list(Path(chain_id): Path<u64>) -> Response {
    if chain_id != 1 {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(json!({ "vaults": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] })).into_response()
}

async fn vault_detail(Path((_chain_id, vault_id)): Path<(u64, String)>) -> Response {
    match vault_id.as_str() {
        "1" => Json(normal_vault()).into_response(),
        "2" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "3" => Json(smart_vault()).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn smart_lending_tokens() -> Json<Value> {
    Json(json!([{ "symbol": "fUSDC", "address": "0x0000000000000000000000000000000000000001" }]))
}

async fn echo(
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let x_custom = headers
        .get("x-custom")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    (
        StatusCode::CREATED,
        [("x-upstream", "yes")],
        Json(json!({
            "method": method.as_str(),
            "query": query,
            "body": body,
            "x_custom": x_custom,
        })),
    )
}

/// Starts the mock upstream and returns its base URL.
pub async fn upstream_server() -> String {
    let router = Router::new()
        .route("/v2/borrowing/{chain_id}/vaults", get(vault_list))
        .route("/v2/borrowing/{chain_id}/vaults/{vault_id}", get(vault_detail))
        .route("/v2/smart-lending/{chain_id}/tokens", get(smart_lending_tokens))
        .route("/echo", any(echo))
        .route("/redirect", get(|| async { Redirect::to("/v2/borrowing/1/vaults") }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{address}")
}

/// The calculator app wired to the upstream at `base_url`.
pub fn test_app(base_url: &str) -> Router {
    let metrics = MetricsRegistry::new();
    let client = FluidApiClient::with_timeout(base_url, Some(TEST_TIMEOUT))
        .unwrap()
        .with_metrics(metrics.upstream.clone());
    let state = AppState {
        source: Arc::new(client),
        proxy: ProxyState {
            http_client: proxy_http_client(Some(TEST_TIMEOUT)).unwrap(),
            upstream: Url::parse(base_url).unwrap(),
        },
        metrics,
    };
    app(state, TEST_TIMEOUT)
}

/// An app whose upstream refuses connections.
pub fn unreachable_app() -> Router {
    test_app("http://127.0.0.1:1")
}
