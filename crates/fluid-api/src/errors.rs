use crate::dto::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use fluid_client::FluidApiError;
use fluid_types::ChainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Bad gateway: {0}")]
    BadGateway(String),
    #[error("Internal server error")]
    InternalServerError,
}

impl From<FluidApiError> for ApiError {
    fn from(err: FluidApiError) -> Self {
        // NOTE: Error is already logged by the caller
        match err {
            FluidApiError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
                Self::NotFound(err.to_string())
            }
            FluidApiError::Status { .. } => Self::BadGateway(err.to_string()),
            FluidApiError::HttpError(_) => Self::BadGateway("Fluid API unreachable".to_string()),
            FluidApiError::JsonError(_) => {
                Self::BadGateway("Fluid API returned malformed JSON".to_string())
            }
            FluidApiError::InvalidBaseUrl(_) | FluidApiError::InternalServerError => {
                Self::InternalServerError
            }
        }
    }
}

impl From<ChainError> for ApiError {
    fn from(err: ChainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };
        let response: ApiResponse<()> = ApiResponse::error(msg);
        (status, Json(response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: StatusCode) -> FluidApiError {
        FluidApiError::Status {
            status,
            url: "https://api.fluid.instadapp.io/v2/borrowing/1/vaults/9".to_string(),
        }
    }

    #[test]
    fn test_upstream_status_mapping() {
        assert!(matches!(
            ApiError::from(status(StatusCode::NOT_FOUND)),
            ApiError::NotFound(msg) if msg == "Fluid API error 404"
        ));
        assert!(matches!(
            ApiError::from(status(StatusCode::SERVICE_UNAVAILABLE)),
            ApiError::BadGateway(msg) if msg == "Fluid API error 503"
        ));
        assert!(matches!(
            ApiError::from(FluidApiError::InvalidBaseUrl("x".to_string())),
            ApiError::InternalServerError
        ));
    }

    #[test]
    fn test_chain_error_is_bad_request() {
        assert!(matches!(
            ApiError::from(ChainError::Unsupported(10)),
            ApiError::BadRequest(msg) if msg == "Unsupported chain id: 10"
        ));
    }

    #[test]
    fn test_error_response_status() {
        let response = ApiError::BadGateway("Fluid API error 500".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
