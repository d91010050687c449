use cosmwasm_std::Binary;
use tracing::debug;

use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::core::types::invocation_context::InvocationContext;
use crate::execute::create_asset::{create_asset, CreateAssetV1};
use crate::execute::delete_asset::{delete_asset, DeleteAssetV1};
use crate::execute::transfer_asset::{transfer_asset, TransferAssetV1};
use crate::execute::update_asset::{update_asset, UpdateAssetV1};
use crate::instantiate::init_contract::init_contract;
use crate::ledger::ledger_store::{LedgerDeps, LedgerDepsMut};
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::query_all_assets::query_all_assets;
use crate::query::query_asset::query_asset;
use crate::query::query_asset_exists::query_asset_exists;
use crate::query::query_asset_history::query_asset_history;
use crate::query::query_state::query_state;
use crate::query::query_transaction_info::query_transaction_info;
use crate::query::query_version::query_version;
use crate::service::asset_registry::AssetRegistry;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::validation::validate_execute_msg::validate_execute_msg;
use crate::validation::validate_init_msg::validate_init_msg;

pub fn instantiate(
    deps: LedgerDepsMut,
    ctx: &InvocationContext,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    // Execute the core instantiation code
    init_contract(deps, ctx, msg)
}

pub fn query(deps: LedgerDeps, msg: QueryMsg) -> AssetResult<Binary> {
    match msg {
        QueryMsg::ReadAsset { id } => query_asset(&deps, id),
        QueryMsg::AssetExists { id } => query_asset_exists(&deps, id),
        QueryMsg::GetAllAssets {} => query_all_assets(&deps),
        QueryMsg::GetHistory { id } => query_asset_history(&deps, id),
        QueryMsg::GetTransactionInfo { tx_id } => query_transaction_info(&deps, tx_id),
        QueryMsg::QueryState {} => query_state(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

pub fn execute(
    deps: LedgerDepsMut,
    ctx: &InvocationContext,
    msg: ExecuteMsg,
) -> EntryPointResponse {
    // Ensure the execute message is properly formatted before doing anything
    validate_execute_msg(&msg)?;
    debug!(tx_id = %ctx.tx_id, caller = %ctx.caller.id, "executing {:?}", msg);
    match msg {
        ExecuteMsg::CreateAsset { .. } => create_asset(
            &AssetRegistry::new(deps, ctx),
            CreateAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::UpdateAsset { .. } => update_asset(
            &AssetRegistry::new(deps, ctx),
            UpdateAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::DeleteAsset { .. } => delete_asset(
            &AssetRegistry::new(deps, ctx),
            DeleteAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::TransferAsset { .. } => transfer_asset(
            &AssetRegistry::new(deps, ctx),
            TransferAssetV1::from_execute_msg(msg)?,
        ),
    }
}

pub fn migrate(deps: LedgerDepsMut, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
