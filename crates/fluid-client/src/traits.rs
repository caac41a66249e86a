use serde_json::Value;

use crate::error::FluidApiError;

/// Upstream lending data, addressed by numeric chain id.
///
/// Implementations must not cache: every call reflects the upstream state at
/// the time of the call.
#[async_trait::async_trait]
pub trait VaultDataSource: Send + Sync {
    /// `GET v2/borrowing/{chain_id}/vaults`
    async fn list_vaults(&self, chain_id: u64) -> Result<Value, FluidApiError>;

    /// `GET v2/borrowing/{chain_id}/vaults/{vault_id}`
    async fn get_vault(&self, chain_id: u64, vault_id: &str) -> Result<Value, FluidApiError>;

    /// `GET v2/smart-lending/{chain_id}/tokens`
    async fn list_smart_lending_tokens(&self, chain_id: u64) -> Result<Value, FluidApiError>;
}
