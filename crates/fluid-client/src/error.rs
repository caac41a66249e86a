use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FluidApiError {
    #[error("Internal server error")]
    InternalServerError,

    #[error("Fluid API error {}", .status.as_u16())]
    Status { status: StatusCode, url: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid Fluid API base url: {0}")]
    InvalidBaseUrl(String),
}

impl FluidApiError {
    /// Upstream HTTP status, when the failure came from one.
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InternalServerError => "internal",
            Self::Status { .. } => "status",
            Self::HttpError(_) => "transport",
            Self::JsonError(_) => "json",
            Self::InvalidBaseUrl(_) => "config",
        }
    }
}
