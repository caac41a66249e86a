mod cli;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use pragma_common::{
    services::{Service, ServiceGroup},
    telemetry::init_telemetry,
};
use url::Url;

use crate::cli::FluidCli;
use fluid_api::{ApiService, AppState, ProxyState, proxy::proxy_http_client};
use fluid_client::FluidApiClient;
use fluid_metrics::MetricsRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let FluidCli {
        otel_collector_endpoint,
        api_host,
        api_port,
        fluid_api_url,
        request_timeout_secs,
    } = FluidCli::parse();

    let app_name = "fluid_calculator";
    if let Err(e) = init_telemetry(app_name, otel_collector_endpoint) {
        anyhow::bail!("Could not init telemetry: {e}");
    }

    let request_timeout = Duration::from_secs(request_timeout_secs);
    let metrics = MetricsRegistry::new();

    let client = FluidApiClient::with_timeout(&fluid_api_url, Some(request_timeout))
        .context("Could not init the Fluid API client")?
        .with_metrics(metrics.upstream.clone());

    let proxy = ProxyState {
        http_client: proxy_http_client(Some(request_timeout))
            .context("Could not init the proxy HTTP client")?,
        upstream: Url::parse(&fluid_api_url).context("Invalid Fluid API url")?,
    };

    tracing::info!(upstream = %fluid_api_url, "Using Fluid API");

    let app_state = AppState {
        source: Arc::new(client),
        proxy,
        metrics,
    };

    let api_service = ApiService::new(app_state, &api_host, api_port, request_timeout);

    ServiceGroup::default()
        .with(api_service)
        .start_and_drive_to_end()
        .await?;

    Ok(())
}
