use cosmwasm_std::Binary;

use crate::core::state::list_assets;
use crate::ledger::ledger_store::LedgerDeps;
use crate::util::aliases::AssetResult;
use crate::util::functions::to_json_response;

/// A query that returns every live asset as a JSON array, in the ledger's key order.  Ids compare
/// bytewise, so `asset10` is listed before `asset2`.
///
/// # Parameters
///
/// * `deps` Read-only access to the ledger.
pub fn query_all_assets(deps: &LedgerDeps) -> AssetResult<Binary> {
    to_json_response(&list_assets(deps.storage)?)
}
