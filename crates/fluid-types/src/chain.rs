use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use utoipa::ToSchema;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("Unsupported chain id: {0}")]
    Unsupported(u64),
}

/// Chains the calculator can be pointed at.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    Hash,
    Eq,
    PartialEq,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Ethereum,
    Base,
    Arbitrum,
    Polygon,
}

impl Chain {
    /// EVM chain id, as used in the Fluid API paths.
    pub const fn id(self) -> u64 {
        match self {
            Self::Ethereum => 1,
            Self::Base => 8453,
            Self::Arbitrum => 42161,
            Self::Polygon => 137,
        }
    }

    pub fn from_id(id: u64) -> Result<Self, ChainError> {
        Self::iter()
            .find(|chain| chain.id() == id)
            .ok_or(ChainError::Unsupported(id))
    }

    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}
