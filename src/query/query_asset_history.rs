use cosmwasm_std::Binary;

use crate::core::keys::asset_key;
use crate::core::types::asset::Asset;
use crate::core::types::asset_history_entry::AssetHistoryEntry;
use crate::ledger::ledger_store::LedgerDeps;
use crate::service::transaction_journal::load_transaction;
use crate::util::aliases::AssetResult;
use crate::util::canonical_json::from_canonical_slice;
use crate::util::functions::to_json_response;
use crate::util::traits::ResultExtensions;

/// Rebuilds the version history of an asset, oldest first.  Every entry of the ledger's change log
/// for the asset key is joined with the journal record of the invocation that produced it.
///
/// An id that was never used has an empty history.  A change log entry without a matching journal
/// record means the ledger is inconsistent, and fails with a transaction
/// [NotFound](crate::core::error::ContractError::NotFound) error.
///
/// # Parameters
///
/// * `deps` Read-only access to the ledger.
/// * `id` The id of the asset, which may be live or deleted.
pub fn get_asset_history(deps: &LedgerDeps, id: &str) -> AssetResult<Vec<AssetHistoryEntry>> {
    deps.history
        .history_for(&asset_key(id)?)
        .map(|modification| {
            let transaction = load_transaction(deps.storage, &modification.tx_id)?;
            let value = if modification.is_delete {
                None
            } else {
                Some(from_canonical_slice::<Asset>(&modification.value)?)
            };
            AssetHistoryEntry {
                tx_id: modification.tx_id,
                timestamp: modification.timestamp,
                is_delete: modification.is_delete,
                transaction,
                value,
            }
            .to_ok()
        })
        .collect()
}

/// A query that responds with the [history](self::get_asset_history) of an asset as a JSON array.
pub fn query_asset_history<S: Into<String>>(deps: &LedgerDeps, id: S) -> AssetResult<Binary> {
    to_json_response(&get_asset_history(deps, &id.into())?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::error::{ContractError, RecordKind};
    use crate::core::keys::asset_key;
    use crate::core::msg::{ExecuteMsg, QueryMsg};
    use crate::core::types::asset_history_entry::AssetHistoryEntry;
    use crate::testutil::test_constants::{DEFAULT_ASSET_ID, DEFAULT_CHANNEL_ID};
    use crate::testutil::test_utilities::{david, max, TestLedger};
    use crate::util::aliases::AssetResult;

    use super::get_asset_history;

    fn history(ledger: &TestLedger, id: &str) -> AssetResult<Vec<AssetHistoryEntry>> {
        ledger.ledger.evaluate(|deps| get_asset_history(&deps, id))
    }

    #[test]
    fn test_history_follows_the_asset_lifecycle() {
        let mut ledger = TestLedger::instantiated();
        let created = ledger.create_default_asset();
        let create_tx = ledger.last_tx_id();
        ledger
            .execute_as(
                david(),
                ExecuteMsg::UpdateAsset {
                    asset: r#"{"id":"asset1","name":"Stool"}"#.to_string(),
                },
            )
            .unwrap();
        ledger
            .execute_as(
                david(),
                ExecuteMsg::TransferAsset {
                    id: DEFAULT_ASSET_ID.to_string(),
                    new_owner_id: max().id,
                },
            )
            .unwrap();
        ledger
            .execute_as(
                max(),
                ExecuteMsg::DeleteAsset {
                    id: DEFAULT_ASSET_ID.to_string(),
                },
            )
            .unwrap();
        let delete_tx = ledger.last_tx_id();
        let entries = history(&ledger, DEFAULT_ASSET_ID).expect("history should be available");
        assert_eq!(4, entries.len(), "every mutation should produce one entry");
        assert_eq!(create_tx, entries[0].tx_id);
        assert_eq!(Some(created), entries[0].value, "the first entry is the created asset");
        assert_eq!(
            Some(&json!("Stool")),
            entries[1].value.as_ref().and_then(|asset| asset.attributes.get("name")),
        );
        assert_eq!(
            Some("Max"),
            entries[2].value.as_ref().map(|asset| asset.owner.as_str()),
        );
        let last = &entries[3];
        assert_eq!(delete_tx, last.tx_id);
        assert!(last.is_delete, "the final entry should record the deletion");
        assert_eq!(None, last.value);
        assert!(last.transaction.deleted);
        assert_eq!(max().id, last.transaction.creator_id);
        assert_eq!(max().org, last.transaction.creator_org);
        for entry in &entries {
            assert_eq!(entry.tx_id, entry.transaction.tx_id, "the join should match tx ids");
            assert_eq!(entry.timestamp, entry.transaction.tx_timestamp);
            assert_eq!(DEFAULT_CHANNEL_ID, entry.transaction.channel_id);
            assert_eq!(entry.is_delete, entry.transaction.deleted);
        }
        assert!(
            entries
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp),
            "entries should be in ledger time order",
        );
        // deleted assets keep their history, but the last entry flips once the id is reused
        ledger
            .execute_as(
                david(),
                ExecuteMsg::CreateAsset {
                    asset: r#"{"id":"asset1"}"#.to_string(),
                },
            )
            .unwrap();
        let entries = history(&ledger, DEFAULT_ASSET_ID).unwrap();
        assert_eq!(5, entries.len());
        assert!(!entries[4].is_delete);
    }

    #[test]
    fn test_history_for_unknown_id_is_empty() {
        let ledger = TestLedger::instantiated();
        let entries: Vec<AssetHistoryEntry> = ledger
            .query_json(QueryMsg::GetHistory {
                id: "asset404".to_string(),
            })
            .expect("an unknown id should produce an empty history");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_history_without_journal_record_is_an_error() {
        let mut ledger = TestLedger::instantiated();
        ledger.create_default_asset();
        // bypass the registry, leaving a change log entry with no journal record
        ledger
            .run_as(david(), |deps, _| {
                deps.storage.set(
                    &asset_key(DEFAULT_ASSET_ID)?,
                    br#"{"id":"asset1","owner":"David","ownerId":"x"}"#,
                );
                Ok(())
            })
            .unwrap();
        let orphan_tx = ledger.last_tx_id();
        match history(&ledger, DEFAULT_ASSET_ID).unwrap_err() {
            ContractError::NotFound { kind, id } => {
                assert_eq!(RecordKind::Transaction, kind);
                assert_eq!(orphan_tx, id);
            }
            error => panic!("unexpected error encountered: {:?}", error),
        }
        assert_eq!(
            0,
            ledger.ledger.open_cursors(),
            "the history cursor should be released when the join fails",
        );
    }

    #[test]
    fn test_history_with_undecodable_version_is_an_error() {
        let mut ledger = TestLedger::instantiated();
        ledger.create_default_asset();
        ledger
            .run_as(david(), |deps, ctx| {
                deps.storage.set(&asset_key(DEFAULT_ASSET_ID)?, b"garbage");
                crate::service::transaction_journal::record_transaction(deps.storage, ctx, false)?;
                Ok(())
            })
            .unwrap();
        let error = history(&ledger, DEFAULT_ASSET_ID).unwrap_err();
        assert!(
            matches!(error, ContractError::Json(_)),
            "expected a json error, but got: {:?}",
            error,
        );
        assert_eq!(0, ledger.ledger.open_cursors());
    }
}
