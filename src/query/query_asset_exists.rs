use cosmwasm_std::Binary;

use crate::core::state::asset_exists;
use crate::ledger::ledger_store::LedgerDeps;
use crate::util::aliases::AssetResult;
use crate::util::functions::to_json_response;

/// A query that responds with `true` when a live asset holds the given id, and `false` otherwise.
pub fn query_asset_exists<S: Into<String>>(deps: &LedgerDeps, id: S) -> AssetResult<Binary> {
    to_json_response(&asset_exists(deps.storage, &id.into())?)
}
