use cosmwasm_std::Binary;

use crate::core::state::config_read;
use crate::ledger::ledger_store::LedgerDeps;
use crate::util::aliases::AssetResult;
use crate::util::functions::to_json_response;

/// A query that directly returns the contract's stored [StateV1](crate::core::state::StateV1) value.
///
/// # Parameters
///
/// * `deps` Read-only access to the ledger.
pub fn query_state(deps: &LedgerDeps) -> AssetResult<Binary> {
    to_json_response(&config_read(deps.storage)?)
}

#[cfg(test)]
mod tests {
    use crate::core::msg::{InitMsg, QueryMsg};
    use crate::core::state::StateV1;
    use crate::testutil::test_utilities::{david, TestLedger};

    #[test]
    fn test_successful_query_state() {
        let mut ledger = TestLedger::new();
        ledger
            .instantiate_as(
                david(),
                InitMsg {
                    id_prefix: Some("item".to_string()),
                    assets: vec![],
                },
            )
            .unwrap();
        let state: StateV1 = ledger
            .query_json(QueryMsg::QueryState {})
            .expect("the state query should succeed");
        assert_eq!(StateV1::new("item", 1), state);
        ledger.create_default_asset();
        let state: StateV1 = ledger.query_json(QueryMsg::QueryState {}).unwrap();
        assert_eq!(2, state.next_id, "the counter should advance with each generated id");
    }
}
