use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The configuration of a freshly instantiated registry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InitMsg {
    /// Prepended to the counter when generating asset ids.  Defaults to `asset`.
    pub id_prefix: Option<String>,
    /// Serialized asset payloads to seed the ledger with, owned by the instantiating caller.
    #[serde(default)]
    pub assets: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Registers a new asset.  `asset` is a JSON object; its `id` is generated when omitted.
    CreateAsset { asset: String },
    /// Replaces every non-reserved attribute of an existing asset.  `asset` must carry its `id`.
    UpdateAsset { asset: String },
    DeleteAsset { id: String },
    /// Hands an asset over to the caller identified by `new_owner_id`.
    TransferAsset { id: String, new_owner_id: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    ReadAsset { id: String },
    AssetExists { id: String },
    GetAllAssets {},
    GetHistory { id: String },
    GetTransactionInfo { tx_id: String },
    QueryState {},
    QueryVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}

#[cfg(test)]
mod tests {
    use schemars::schema_for;
    use serde_json::json;

    use super::{ExecuteMsg, InitMsg, QueryMsg};

    #[test]
    fn test_messages_use_snake_case_variants() {
        let msg: ExecuteMsg = serde_json::from_value(json!({
            "transfer_asset": { "id": "asset1", "new_owner_id": "x509::/CN=Max::" }
        }))
        .expect("the transfer message should deserialize");
        assert_eq!(
            ExecuteMsg::TransferAsset {
                id: "asset1".to_string(),
                new_owner_id: "x509::/CN=Max::".to_string(),
            },
            msg,
        );
        assert_eq!(
            json!({ "get_all_assets": {} }),
            serde_json::to_value(QueryMsg::GetAllAssets {}).unwrap(),
        );
    }

    #[test]
    fn test_init_msg_seed_assets_default_to_empty() {
        let msg: InitMsg = serde_json::from_value(json!({ "id_prefix": null })).unwrap();
        assert!(msg.assets.is_empty());
        assert_eq!(None, msg.id_prefix);
    }

    #[test]
    fn test_schemas_can_be_generated() {
        let schema = serde_json::to_value(schema_for!(ExecuteMsg)).unwrap();
        let rendered = schema.to_string();
        for variant in ["create_asset", "update_asset", "delete_asset", "transfer_asset"] {
            assert!(
                rendered.contains(variant),
                "expected the execute schema to describe {}",
                variant,
            );
        }
    }
}
