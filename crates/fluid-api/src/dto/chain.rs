use fluid_types::Chain;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChainDTO {
    pub id: u64,
    pub name: String,
    pub slug: Chain,
}

impl From<Chain> for ChainDTO {
    fn from(chain: Chain) -> Self {
        Self {
            id: chain.id(),
            name: chain.to_string(),
            slug: chain,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChainListResponse {
    pub items: Vec<ChainDTO>,
}
