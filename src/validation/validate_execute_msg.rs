use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::invocation_context::display_name_from_identity;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// Checks the shape of an execute msg before any route touches the ledger.  Every problem found is
/// reported at once.
pub fn validate_execute_msg(msg: &ExecuteMsg) -> AssetResult<()> {
    match msg {
        ExecuteMsg::CreateAsset { asset } => validate_asset_payload("ExecuteMsg::CreateAsset", asset),
        ExecuteMsg::UpdateAsset { asset } => validate_asset_payload("ExecuteMsg::UpdateAsset", asset),
        ExecuteMsg::DeleteAsset { id } => validate_delete_asset(id),
        ExecuteMsg::TransferAsset { id, new_owner_id } => validate_transfer_asset(id, new_owner_id),
    }
}

fn validate_asset_payload(message_type: &str, asset: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if asset.trim().is_empty() {
        invalid_fields.push("asset: must not be blank".to_string());
    }
    gather_errors(message_type, invalid_fields)
}

fn validate_delete_asset(id: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if id.trim().is_empty() {
        invalid_fields.push("id: must not be blank".to_string());
    }
    gather_errors("ExecuteMsg::DeleteAsset", invalid_fields)
}

fn validate_transfer_asset(id: &str, new_owner_id: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if id.trim().is_empty() {
        invalid_fields.push("id: must not be blank".to_string());
    }
    if new_owner_id.trim().is_empty() {
        invalid_fields.push("new_owner_id: must not be blank".to_string());
    } else if display_name_from_identity(new_owner_id).is_err() {
        invalid_fields.push("new_owner_id: must embed a CN=<name>:: display name".to_string());
    }
    gather_errors("ExecuteMsg::TransferAsset", invalid_fields)
}

fn gather_errors(message_type: &str, invalid_fields: Vec<String>) -> AssetResult<()> {
    if !invalid_fields.is_empty() {
        ContractError::malformed(message_type, invalid_fields.join(", ")).to_err()
    } else {
        Ok(())
    }
}
