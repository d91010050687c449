use cosmwasm_std::Binary;

use crate::{
    ledger::ledger_store::LedgerDeps, migrate::version_info::get_version_info,
    util::aliases::AssetResult, util::functions::to_json_response,
};

/// Pulls the version info for the contract out of the version store.
/// On a success, serializes the value to a cosmwasm Binary and responds with Ok.
///
/// # Parameters
///
/// * `deps` Read-only access to the ledger.
pub fn query_version(deps: &LedgerDeps) -> AssetResult<Binary> {
    to_json_response(&get_version_info(deps.storage)?)
}
