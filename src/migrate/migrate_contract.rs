use cosmwasm_std::Response;
use semver::Version;
use tracing::{debug, warn};

use crate::{
    core::error::ContractError,
    ledger::ledger_store::LedgerDepsMut,
    util::{
        aliases::{AssetResult, EntryPointResponse},
        event_attributes::{EventAttributes, EventType},
        traits::ResultExtensions,
    },
};

use super::version_info::{
    get_version_info, migrate_version_info, VersionInfoV1, CONTRACT_NAME, CONTRACT_VERSION,
};

/// Moves the ledger onto the running registry code.  The version record left behind by the last
/// instantiation or upgrade must name this registry and must not be newer than the running build.
/// Assets, the id counter and the transaction journal are left as they are.
///
/// # Parameters
///
/// * `deps` Mutable access to the ledger for this invocation.
pub fn migrate_contract(deps: LedgerDepsMut) -> EntryPointResponse {
    let recorded = get_version_info(deps.storage)?;
    check_upgrade_path(&recorded)?;
    let running = migrate_version_info(deps.storage)?;
    debug!(from = %recorded.version, to = %running.version, "upgraded ledger code");
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::MigrateContract).set_new_value(&running.version),
        )
        .to_ok()
}

/// Rejects an upgrade when the ledger was written by another registry, or by a newer release of
/// this one.  Re-running the same version is allowed.
fn check_upgrade_path(recorded: &VersionInfoV1) -> AssetResult<()> {
    if recorded.contract != CONTRACT_NAME {
        warn!(recorded = %recorded.contract, "ledger belongs to a different registry");
        return ContractError::InvalidContractName {
            current_contract: recorded.contract.to_owned(),
            migration_contract: CONTRACT_NAME.to_string(),
        }
        .to_err();
    }
    let running = CONTRACT_VERSION.parse::<Version>()?;
    if recorded.parse_sem_ver()? > running {
        warn!(recorded = %recorded.version, running = %running, "refusing to downgrade ledger code");
        return ContractError::InvalidContractVersion {
            current_version: recorded.version.to_owned(),
            migration_version: CONTRACT_VERSION.to_string(),
        }
        .to_err();
    }
    Ok(())
}
