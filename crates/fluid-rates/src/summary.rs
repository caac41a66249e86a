use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::{
    classify::is_smart_strict,
    value::{is_truthy, lookup, scalar_to_string},
};

/// One entry of the vault list, built from the vault's detail document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VaultSummary {
    pub id: String,
    pub name: String,
    pub is_smart: bool,
    #[schema(value_type = Object)]
    pub raw: Value,
}

impl VaultSummary {
    pub fn from_detail(id: String, detail: Value) -> Self {
        let name = ["name", "symbol", "label"]
            .into_iter()
            .map(|key| lookup(&detail, &[key]))
            .find(|field| is_truthy(*field))
            .flatten()
            .and_then(scalar_to_string)
            .unwrap_or_else(|| fallback_name(&id));

        Self {
            is_smart: is_smart_strict(&detail),
            id,
            name,
            raw: detail,
        }
    }

    /// Stand-in for a vault whose detail could not be fetched.
    pub fn placeholder(id: String) -> Self {
        Self {
            name: fallback_name(&id),
            is_smart: false,
            raw: json!({ "id": id }),
            id,
        }
    }
}

fn fallback_name(id: &str) -> String {
    format!("Vault #{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fallback_order() {
        let s = VaultSummary::from_detail("1".into(), json!({ "name": "ETH/USDC", "symbol": "X" }));
        assert_eq!(s.name, "ETH/USDC");

        let s = VaultSummary::from_detail("2".into(), json!({ "name": "", "symbol": "wstETH" }));
        assert_eq!(s.name, "wstETH");

        let s = VaultSummary::from_detail("3".into(), json!({ "label": "Label" }));
        assert_eq!(s.name, "Label");

        let s = VaultSummary::from_detail("4".into(), json!({ "name": null }));
        assert_eq!(s.name, "Vault #4");
    }

    #[test]
    fn test_classification_uses_strict_predicate() {
        let loose_only = json!({ "name": "v", "borrowRate": { "liquidity": { "token1": "0" } } });
        assert!(!VaultSummary::from_detail("5".into(), loose_only).is_smart);

        let smart = json!({ "name": "v", "borrowRate": { "dex": { "trading": "12" } } });
        let summary = VaultSummary::from_detail("6".into(), smart.clone());
        assert!(summary.is_smart);
        assert_eq!(summary.raw, smart);
    }

    #[test]
    fn test_placeholder() {
        let s = VaultSummary::placeholder("42".into());
        assert_eq!(s.id, "42");
        assert_eq!(s.name, "Vault #42");
        assert!(!s.is_smart);
        assert_eq!(s.raw, json!({ "id": "42" }));
    }
}
