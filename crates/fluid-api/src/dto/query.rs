use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

const DEFAULT_PRINCIPAL: f64 = 10_000.0;
const DEFAULT_DAYS: u32 = 30;

/// Query parameters for the cost comparison endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompareQuery {
    /// Empty means "no vault selected"
    #[serde(default, deserialize_with = "empty_as_none")]
    pub normal_vault_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub smart_vault_id: Option<String>,
    #[serde(default = "default_principal")]
    pub principal: f64,
    #[serde(default = "default_days")]
    pub days: u32,
}

const fn default_principal() -> f64 {
    DEFAULT_PRINCIPAL
}

const fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}
