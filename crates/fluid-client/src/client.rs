use std::{sync::Arc, time::Duration};

use fluid_metrics::UpstreamMetrics;
use reqwest::{
    Client,
    header::{CACHE_CONTROL, PRAGMA},
};
use serde_json::Value;
use url::Url;

use crate::{error::FluidApiError, traits::VaultDataSource};

pub const DEFAULT_FLUID_API_URL: &str = "https://api.fluid.instadapp.io";

/// reqwest-backed [`VaultDataSource`] talking to the Fluid API.
pub struct FluidApiClient {
    http_client: Client,
    base_url: Url,
    metrics: Option<Arc<UpstreamMetrics>>,
}

impl FluidApiClient {
    pub fn new(base_url: &str) -> Result<Self, FluidApiError> {
        Self::with_timeout(base_url, None)
    }

    /// `timeout` bounds each request end to end. `None` leaves requests
    /// unbounded.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, FluidApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FluidApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FluidApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let http_client = http_client(timeout)?;

        Ok(Self {
            http_client,
            base_url,
            metrics: None,
        })
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<UpstreamMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FluidApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FluidApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, endpoint: &'static str, url: Url) -> Result<Value, FluidApiError> {
        if let Some(metrics) = &self.metrics {
            metrics.record_request(endpoint);
        }

        let result = self.fetch(&url).await;
        if let Err(err) = &result {
            if let Some(metrics) = &self.metrics {
                metrics.record_failure(endpoint, err.reason());
            }
            tracing::warn!(url = %url, endpoint, error = %err, "Fluid API request failed");
        }
        result
    }

    async fn fetch(&self, url: &Url) -> Result<Value, FluidApiError> {
        let response = self
            .http_client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FluidApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl VaultDataSource for FluidApiClient {
    async fn list_vaults(&self, chain_id: u64) -> Result<Value, FluidApiError> {
        let chain_id = chain_id.to_string();
        let url = self.endpoint(&["v2", "borrowing", &chain_id, "vaults"])?;
        self.get_json("list_vaults", url).await
    }

    async fn get_vault(&self, chain_id: u64, vault_id: &str) -> Result<Value, FluidApiError> {
        let chain_id = chain_id.to_string();
        let url = self.endpoint(&["v2", "borrowing", &chain_id, "vaults", vault_id])?;
        self.get_json("get_vault", url).await
    }

    async fn list_smart_lending_tokens(&self, chain_id: u64) -> Result<Value, FluidApiError> {
        let chain_id = chain_id.to_string();
        let url = self.endpoint(&["v2", "smart-lending", &chain_id, "tokens"])?;
        self.get_json("list_smart_lending_tokens", url).await
    }
}

pub fn http_client(timeout: Option<Duration>) -> Result<Client, FluidApiError> {
    let builder = Client::builder();
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build().map_err(|e| {
        tracing::error!("Failed to build HTTP client: {}", e);
        FluidApiError::InternalServerError
    })
}
