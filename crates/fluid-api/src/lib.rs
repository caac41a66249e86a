pub mod docs;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod proxy;
pub mod router;

#[cfg(test)]
mod testing;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
use std::{env, time::Duration};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use url::Url;

use fluid_client::VaultDataSource;
use fluid_metrics::MetricsRegistry;
use pragma_common::services::{Service, ServiceRunner};

use docs::ApiDoc;
use router::api_router;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn VaultDataSource>,
    pub proxy: ProxyState,
    pub metrics: Arc<MetricsRegistry>,
}

/// Upstream the pass-through proxy relays to.
#[derive(Clone)]
pub struct ProxyState {
    pub http_client: reqwest::Client,
    pub upstream: Url,
}

pub struct ApiService {
    state: AppState,
    host: String,
    port: u16,
    request_timeout: Duration,
}

impl ApiService {
    pub fn new(state: AppState, host: &str, port: u16, request_timeout: Duration) -> Self {
        Self {
            state,
            host: host.to_owned(),
            port,
            request_timeout,
        }
    }
}

fn cors_layer_from_env() -> CorsLayer {
    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|origin| {
                    let trimmed = origin.trim();
                    if trimmed.is_empty() {
                        return None;
                    }
                    match HeaderValue::from_str(trimmed) {
                        Ok(value) => Some(value),
                        Err(err) => {
                            tracing::warn!(
                                origin = trimmed,
                                error = %err,
                                "Invalid origin in CORS_ALLOWED_ORIGINS, skipping",
                            );
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS_ALLOWED_ORIGINS was set but no valid origins were parsed; falling back to permissive CORS",
                );
                return CorsLayer::permissive();
            }

            tracing::info!(allowed = %origins, "Configured restricted CORS origins");

            CorsLayer::new()
                .allow_headers(AllowHeaders::mirror_request())
                .allow_methods(AllowMethods::list([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ]))
                .allow_origin(AllowOrigin::list(allowed_origins))
        }
        Err(_) => {
            tracing::info!("CORS_ALLOWED_ORIGINS not set; using permissive CORS configuration");
            CorsLayer::permissive()
        }
    }
}

/// The full HTTP application: routes, tracing, timeout and CORS layers.
#[allow(clippy::default_constructed_unit_structs)]
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    api_router::<ApiDoc>(state.clone())
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        // start OpenTelemetry trace on incoming request, echo its context in the response
        .layer(OtelAxumLayer::default())
        .layer(OtelInResponseLayer::default())
        .layer(cors_layer_from_env())
}

#[async_trait::async_trait]
impl Service for ApiService {
    async fn start<'a>(&mut self, mut runner: ServiceRunner<'a>) -> anyhow::Result<()> {
        ApiDoc::generate_openapi_json("./".into())?;

        let host = self.host.clone();
        let port = self.port;
        let state = self.state.clone();
        let request_timeout = self.request_timeout;

        runner.spawn_loop(move |ctx| async move {
            let address = format!("{host}:{port}");
            let socket_addr: SocketAddr = address.parse()?;
            let listener = TcpListener::bind(socket_addr).await?;

            tracing::info!(
                timeout_secs = request_timeout.as_secs(),
                upstream = %state.proxy.upstream,
                "Request timeout configured"
            );

            let app = app(state, request_timeout);

            tracing::info!("🧩 API started at http://{}", socket_addr);

            // Create a shutdown signal from our context
            let token = ctx.token.clone();
            let shutdown = async move { token.cancelled().await };

            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(shutdown)
            .await
            .context("😱 API server stopped!")
        });

        Ok(())
    }
}
