use std::collections::BTreeSet;

use cosmwasm_std::{Response, Storage};
use tracing::debug;

use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::state::{asset_exists, config_save, may_config_read, StateV1};
use crate::core::types::asset::{Asset, AssetInput};
use crate::core::types::invocation_context::InvocationContext;
use crate::ledger::ledger_store::LedgerDepsMut;
use crate::migrate::version_info::migrate_version_info;
use crate::service::asset_registry::AssetRegistry;
use crate::service::asset_repository::AssetRepository;
use crate::service::deps_manager::DepsManager;
use crate::service::transaction_journal::record_transaction;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::constants::{DEFAULT_ID_PREFIX, FIRST_ASSET_NUMBER};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::to_json_response;
use crate::util::traits::ResultExtensions;

/// The main functionality executed when the contract is instantiated.  This stores the contract's
/// [StateV1](crate::core::state::StateV1) and version info, then seeds the ledger with the assets
/// provided in the init msg, all owned by the instantiating caller.  Instantiating again keeps the
/// persisted id counter, so generated ids are never handed out twice.
///
/// # Parameters
///
/// * `deps` Mutable access to the ledger for this invocation.
/// * `ctx` The invocation performing the instantiation.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: LedgerDepsMut,
    ctx: &InvocationContext,
    msg: InitMsg,
) -> EntryPointResponse {
    // Every seed is checked before the first write
    let seeds = msg
        .assets
        .iter()
        .map(|asset| AssetInput::parse("Instantiate", asset))
        .collect::<AssetResult<Vec<AssetInput>>>()?;
    if !seeds.is_empty() {
        ctx.caller.display_name()?;
    }
    check_seed_ids(deps.storage, &seeds)?;
    let existing_state = may_config_read(deps.storage)?;
    let state = StateV1::new(
        msg.id_prefix
            .or_else(|| existing_state.as_ref().map(|state| state.id_prefix.clone()))
            .unwrap_or_else(|| DEFAULT_ID_PREFIX.to_string()),
        existing_state.map_or(FIRST_ASSET_NUMBER, |state| state.next_id),
    );
    config_save(deps.storage, &state)?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    let registry = AssetRegistry::new(deps, ctx);
    let mut seeded: Vec<Option<Asset>> = vec![None; seeds.len()];
    // Explicit ids are claimed first, so no generated id can collide with a later seed
    let (explicit, generated): (Vec<_>, Vec<_>) = seeds
        .into_iter()
        .enumerate()
        .partition(|(_, seed)| seed.id.is_some());
    for (index, input) in explicit.into_iter().chain(generated) {
        seeded[index] = Some(registry.create_asset(input)?);
    }
    let seeded = seeded.into_iter().flatten().collect::<Vec<Asset>>();
    // Seeding already journaled the invocation; an empty instantiation still needs its record
    let deps = registry.into_deps();
    record_transaction(deps.storage, ctx, false)?;
    debug!(seeded = seeded.len(), id_prefix = %state.id_prefix, "instantiated contract");
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::InstantiateContract)
                .set_tx_id(&ctx.tx_id)
                .set_new_value(seeded.len()),
        )
        .set_data(to_json_response(&seeded)?)
        .to_ok()
}

/// Explicit seed ids must be distinct and must not belong to live assets.
fn check_seed_ids(storage: &dyn Storage, seeds: &[AssetInput]) -> AssetResult<()> {
    let mut seen = BTreeSet::new();
    for id in seeds.iter().filter_map(|seed| seed.id.as_deref()) {
        if !seen.insert(id) {
            return ContractError::malformed(
                "Instantiate",
                format!("assets: id [{id}] is provided more than once"),
            )
            .to_err();
        }
        if asset_exists(storage, id)? {
            return ContractError::AlreadyExists { id: id.to_string() }.to_err();
        }
    }
    Ok(())
}
