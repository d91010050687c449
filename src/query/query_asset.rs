use cosmwasm_std::Binary;

use crate::core::state::load_asset;
use crate::ledger::ledger_store::LedgerDeps;
use crate::util::aliases::AssetResult;
use crate::util::functions::to_json_response;

/// A query that returns the current state of a live asset.  A missing or deleted asset produces a
/// [NotFound](crate::core::error::ContractError::NotFound) error.
///
/// # Parameters
///
/// * `deps` Read-only access to the ledger.
/// * `id` The id of the asset to read.
pub fn query_asset<S: Into<String>>(deps: &LedgerDeps, id: S) -> AssetResult<Binary> {
    let asset = load_asset(deps.storage, &id.into())?;
    to_json_response(&asset)
}

#[cfg(test)]
mod tests {
    use crate::core::error::{ContractError, RecordKind};
    use crate::core::msg::{ExecuteMsg, QueryMsg};
    use crate::core::types::asset::Asset;
    use crate::testutil::test_constants::DEFAULT_ASSET_ID;
    use crate::testutil::test_utilities::{david, TestLedger};

    use super::query_asset;

    #[test]
    fn test_query_asset_success() {
        let mut ledger = TestLedger::instantiated();
        let created = ledger.create_default_asset();
        let body = ledger
            .ledger
            .evaluate(|deps| query_asset(&deps, DEFAULT_ASSET_ID))
            .expect("the created asset should be readable");
        let read: Asset = serde_json::from_slice(&body).unwrap();
        assert_eq!(created, read);
    }

    #[test]
    fn test_query_asset_not_found_after_delete() {
        let mut ledger = TestLedger::instantiated();
        ledger.create_default_asset();
        ledger
            .execute_as(
                david(),
                ExecuteMsg::DeleteAsset {
                    id: DEFAULT_ASSET_ID.to_string(),
                },
            )
            .unwrap();
        let err = ledger
            .query(QueryMsg::ReadAsset {
                id: DEFAULT_ASSET_ID.to_string(),
            })
            .unwrap_err();
        assert!(
            matches!(
                err,
                ContractError::NotFound {
                    kind: RecordKind::Asset,
                    ..
                }
            ),
            "expected a not found error, but got: {:?}",
            err,
        );
    }
}
