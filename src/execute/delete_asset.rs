use cosmwasm_std::Response;
use serde::Serialize;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::service::asset_repository::AssetRepository;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::to_json_response;
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset)
/// for ease of use in the underlying [delete_asset](self::delete_asset) function.
///
/// # Parameters
///
/// * `id` The id of the asset to delete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteAssetV1 {
    pub id: String,
}
impl DeleteAssetV1 {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset) variant, then
    /// an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType) error will be
    /// returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<DeleteAssetV1> {
        match msg {
            ExecuteMsg::DeleteAsset { id } => DeleteAssetV1::new(id).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::DeleteAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The data attached to a successful deletion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteAssetData<'a> {
    tx_id: &'a str,
}

/// Route implementation for [ExecuteMsg::DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset).
/// Only the asset's owner may delete it.  The asset disappears from the current state but its
/// history remains queryable, and the response data names the invocation that deleted it.
///
/// # Parameters
///
/// * `repository` The registry bound to the current invocation.
/// * `msg` An instance of the delete asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn delete_asset<T: AssetRepository>(repository: &T, msg: DeleteAssetV1) -> EntryPointResponse {
    let tx_id = repository.delete_asset(&msg.id)?;
    Response::new()
        .add_attributes(EventAttributes::for_asset_event(
            EventType::DeleteAsset,
            &msg.id,
            &tx_id,
        ))
        .set_data(to_json_response(&DeleteAssetData { tx_id: &tx_id })?)
        .to_ok()
}
