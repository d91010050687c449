use cosmwasm_std::Binary;

use crate::ledger::ledger_store::LedgerDeps;
use crate::service::transaction_journal::load_transaction;
use crate::util::aliases::AssetResult;
use crate::util::functions::to_json_response;

/// A query that returns the journal record of a single invocation.
///
/// # Parameters
///
/// * `deps` Read-only access to the ledger.
/// * `tx_id` The ledger-assigned id of the invocation.
pub fn query_transaction_info<S: Into<String>>(deps: &LedgerDeps, tx_id: S) -> AssetResult<Binary> {
    to_json_response(&load_transaction(deps.storage, &tx_id.into())?)
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::Timestamp;

    use crate::core::error::{ContractError, RecordKind};
    use crate::core::msg::QueryMsg;
    use crate::core::types::transaction_record::TransactionRecord;
    use crate::testutil::test_constants::DEFAULT_CHANNEL_ID;
    use crate::testutil::test_utilities::{david, TestLedger};

    #[test]
    fn test_query_transaction_info_success() {
        let mut ledger = TestLedger::instantiated();
        ledger.create_default_asset();
        let tx_id = ledger.last_tx_id();
        let record: TransactionRecord = ledger
            .query_json(QueryMsg::GetTransactionInfo {
                tx_id: tx_id.clone(),
            })
            .expect("the create should have been journaled");
        assert_eq!(
            TransactionRecord {
                tx_id,
                // the second invocation on the test ledger, ten seconds apart
                tx_timestamp: Timestamp::from_seconds(20),
                channel_id: DEFAULT_CHANNEL_ID.to_string(),
                creator_id: david().id,
                creator_org: david().org,
                deleted: false,
            },
            record,
        );
    }

    #[test]
    fn test_query_transaction_info_not_found() {
        let ledger = TestLedger::instantiated();
        let err = ledger
            .query(QueryMsg::GetTransactionInfo {
                tx_id: "unknown".to_string(),
            })
            .unwrap_err();
        assert!(
            matches!(
                err,
                ContractError::NotFound {
                    kind: RecordKind::Transaction,
                    ..
                }
            ),
            "expected a transaction not found error, but got: {:?}",
            err,
        );
    }
}
