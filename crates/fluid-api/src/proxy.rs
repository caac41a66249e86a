//! Pass-through relay to the Fluid API for browser clients.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{
        HeaderMap, Method, Uri,
        header::{CONNECTION, CONTENT_LENGTH, HOST, TRANSFER_ENCODING},
    },
    response::Response,
};
use std::time::Duration;
use url::Url;

use crate::{AppState, errors::ApiError};

pub const PROXY_PREFIX: &str = "/api/fluid";

const MAX_REDIRECTS: usize = 10;

/// Client used to relay requests: follows redirects, no response caching.
pub fn proxy_http_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
    let builder =
        reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build()
}

/// `<upstream>/<path after the proxy prefix><incoming query>`
pub fn upstream_target(upstream: &Url, uri: &Uri) -> String {
    let path = uri.path();
    let suffix = path
        .strip_prefix(PROXY_PREFIX)
        .unwrap_or(path)
        .trim_start_matches('/');
    let query = uri.query().map(|q| format!("?{q}")).unwrap_or_default();
    format!("{}/{suffix}{query}", upstream.as_str().trim_end_matches('/'))
}

fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut forwarded = headers.clone();
    forwarded.remove(HOST);
    forwarded.remove(CONTENT_LENGTH);
    forwarded
}

pub async fn relay(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let target = upstream_target(&state.proxy.upstream, &uri);

    let mut request = state
        .proxy
        .http_client
        .request(method.clone(), &target)
        .headers(forwarded_headers(&headers));
    if method != Method::GET && method != Method::HEAD {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|err| {
        tracing::error!(method = %method, target = %target, error = %err, "Proxy request failed");
        ApiError::BadGateway("Fluid API unreachable".to_string())
    })?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    // the body is re-framed by our server
    for header in [TRANSFER_ENCODING, CONNECTION, CONTENT_LENGTH] {
        response_headers.remove(header);
    }

    let bytes = upstream.bytes().await.map_err(|err| {
        tracing::error!(method = %method, target = %target, error = %err, "Proxy response body failed");
        ApiError::BadGateway("Fluid API response interrupted".to_string())
    })?;

    state
        .metrics
        .proxy
        .record_relayed(method.as_str(), status.as_u16());
    tracing::debug!(method = %method, target = %target, status = status.as_u16(), "Proxied request");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
