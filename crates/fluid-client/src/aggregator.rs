use fluid_rates::{
    VaultSummary,
    value::{first_present, lookup, scalar_to_string},
};
use futures::future::join_all;
use serde_json::Value;

use crate::{error::FluidApiError, traits::VaultDataSource};

/// Lists the vaults of a chain and summarizes each one from its detail.
///
/// Detail fetches run concurrently and are isolated from each other: a
/// failed fetch yields a placeholder summary instead of an error. Only a
/// failure of the list call itself is returned. Output order follows the
/// list order.
pub async fn list_vault_summaries<S>(
    source: &S,
    chain_id: u64,
) -> Result<Vec<VaultSummary>, FluidApiError>
where
    S: VaultDataSource + ?Sized,
{
    let list = source.list_vaults(chain_id).await.map_err(|err| {
        tracing::error!(chain_id, error = %err, "Failed to list vaults");
        err
    })?;
    let ids = vault_ids(&list);

    let details = join_all(ids.iter().map(|id| source.get_vault(chain_id, id))).await;

    let summaries = ids
        .into_iter()
        .zip(details)
        .map(|(id, detail)| match detail {
            Ok(detail) => VaultSummary::from_detail(id, detail),
            Err(err) => {
                tracing::warn!(
                    chain_id,
                    vault_id = %id,
                    error = %err,
                    "Failed to fetch vault detail, using placeholder"
                );
                VaultSummary::placeholder(id)
            }
        })
        .collect();

    Ok(summaries)
}

/// Vault identifiers of a list document, in order.
///
/// Accepts `{ "vaults": [...] }` or a bare array; any other shape lists
/// nothing. Each item is identified by `id`, `vaultId` or `address`, and
/// items without a usable identifier are dropped.
pub fn vault_ids(list: &Value) -> Vec<String> {
    let items = match list {
        Value::Array(items) => items.as_slice(),
        Value::Object(_) => match lookup(list, &["vaults"]) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    items
        .iter()
        .filter_map(|item| {
            first_present([
                lookup(item, &["id"]),
                lookup(item, &["vaultId"]),
                lookup(item, &["address"]),
            ])
            .and_then(scalar_to_string)
        })
        .filter(|id| !id.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, sync::Mutex, time::Duration};

    use reqwest::StatusCode;
    use serde_json::json;

    /// In-memory source. Vaults with a delay answer late, vaults without a
    /// detail fail with a 500.
    #[derive(Default)]
    struct MockSource {
        list: Option<Value>,
        details: HashMap<String, Value>,
        delays_ms: HashMap<String, u64>,
        detail_calls: Mutex<Vec<String>>,
    }

    fn status_error(status: StatusCode) -> FluidApiError {
        FluidApiError::Status {
            status,
            url: "http://mock".to_string(),
        }
    }

    #[async_trait::async_trait]
    impl VaultDataSource for MockSource {
        async fn list_vaults(&self, _chain_id: u64) -> Result<Value, FluidApiError> {
            self.list
                .clone()
                .ok_or_else(|| status_error(StatusCode::BAD_GATEWAY))
        }

        async fn get_vault(&self, _chain_id: u64, vault_id: &str) -> Result<Value, FluidApiError> {
            self.detail_calls.lock().unwrap().push(vault_id.to_string());
            if let Some(ms) = self.delays_ms.get(vault_id) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            self.details
                .get(vault_id)
                .cloned()
                .ok_or_else(|| status_error(StatusCode::INTERNAL_SERVER_ERROR))
        }

        async fn list_smart_lending_tokens(&self, _chain_id: u64) -> Result<Value, FluidApiError> {
            Ok(json!([]))
        }
    }

    #[test]
    fn test_vault_ids_shapes() {
        assert_eq!(
            vault_ids(&json!({ "vaults": [{ "id": 1 }, { "id": "2" }] })),
            ["1", "2"]
        );
        assert_eq!(vault_ids(&json!([{ "id": 3 }])), ["3"]);
        assert!(vault_ids(&json!({ "data": [{ "id": 1 }] })).is_empty());
        assert!(vault_ids(&json!({ "vaults": "nope" })).is_empty());
        assert!(vault_ids(&json!("nope")).is_empty());
        assert!(vault_ids(&json!(null)).is_empty());
    }

    #[test]
    fn test_vault_ids_fallback_and_filtering() {
        let list = json!([
            { "id": 7, "vaultId": 70 },
            { "vaultId": 8, "address": "0xabc" },
            { "address": "0xdef" },
            { "id": "" },
            { "name": "no identifier" },
            { "id": null, "vaultId": 9 }
        ]);
        assert_eq!(vault_ids(&list), ["7", "8", "0xdef", "9"]);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_order_and_placeholders() {
        let source = MockSource {
            list: Some(json!({ "vaults": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] })),
            details: HashMap::from([
                (
                    "1".to_string(),
                    json!({ "name": "ETH/USDC", "borrowRate": { "liquidity": { "token0": "435" } } }),
                ),
                (
                    "3".to_string(),
                    json!({ "symbol": "wstETH/USDC-USDT", "borrowRate": { "dex": { "trading": "50" } } }),
                ),
            ]),
            ..Default::default()
        };

        let summaries = list_vault_summaries(&source, 1).await.unwrap();
        assert_eq!(summaries.len(), 3);

        assert_eq!(summaries[0].id, "1");
        assert_eq!(summaries[0].name, "ETH/USDC");
        assert!(!summaries[0].is_smart);

        assert_eq!(summaries[1], VaultSummary::placeholder("2".to_string()));
        assert_eq!(summaries[1].name, "Vault #2");

        assert_eq!(summaries[2].id, "3");
        assert_eq!(summaries[2].name, "wstETH/USDC-USDT");
        assert!(summaries[2].is_smart);
    }

    #[tokio::test]
    async fn test_order_is_independent_of_completion() {
        let source = MockSource {
            list: Some(json!([{ "id": "a" }, { "id": "b" }, { "id": "c" }])),
            details: HashMap::from([
                ("a".to_string(), json!({ "name": "A" })),
                ("b".to_string(), json!({ "name": "B" })),
                ("c".to_string(), json!({ "name": "C" })),
            ]),
            delays_ms: HashMap::from([("a".to_string(), 60), ("b".to_string(), 30)]),
            ..Default::default()
        };

        let names: Vec<_> = list_vault_summaries(&source, 8453)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_detail_fetches_run_concurrently() {
        let source = MockSource {
            list: Some(json!([{ "id": "a" }, { "id": "b" }, { "id": "c" }])),
            details: HashMap::from([
                ("a".to_string(), json!({})),
                ("b".to_string(), json!({})),
                ("c".to_string(), json!({})),
            ]),
            delays_ms: HashMap::from([
                ("a".to_string(), 200),
                ("b".to_string(), 200),
                ("c".to_string(), 200),
            ]),
            ..Default::default()
        };

        let started = tokio::time::Instant::now();
        let summaries = list_vault_summaries(&source, 1).await.unwrap();
        assert_eq!(summaries.len(), 3);
        assert_eq!(source.detail_calls.lock().unwrap().len(), 3);
        // sequential fetches would take at least 600ms
        assert!(started.elapsed() < Duration::from_millis(550));
    }

    #[tokio::test]
    async fn test_list_failure_propagates() {
        let source = MockSource::default();
        let err = list_vault_summaries(&source, 1).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(source.detail_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_list_shape_is_empty() {
        let source = MockSource {
            list: Some(json!({ "unexpected": true })),
            ..Default::default()
        };
        assert!(list_vault_summaries(&source, 1).await.unwrap().is_empty());
    }
}
