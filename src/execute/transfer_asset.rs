use cosmwasm_std::Response;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::service::asset_repository::AssetRepository;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::to_json_response;
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::TransferAsset](crate::core::msg::ExecuteMsg::TransferAsset)
/// for ease of use in the underlying [transfer_asset](self::transfer_asset) function.
///
/// # Parameters
///
/// * `id` The id of the asset to transfer.
/// * `new_owner_id` The full identity of the caller receiving the asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferAssetV1 {
    pub id: String,
    pub new_owner_id: String,
}
impl TransferAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, new_owner_id: S2) -> Self {
        Self {
            id: id.into(),
            new_owner_id: new_owner_id.into(),
        }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [TransferAsset](crate::core::msg::ExecuteMsg::TransferAsset) variant,
    /// then an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType) error
    /// will be returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<TransferAssetV1> {
        match msg {
            ExecuteMsg::TransferAsset { id, new_owner_id } => {
                TransferAssetV1::new(id, new_owner_id).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::TransferAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::TransferAsset](crate::core::msg::ExecuteMsg::TransferAsset).
/// Only the asset's owner may hand it over.  Nothing but the ownership fields change, and the
/// transferred asset is returned as JSON data.
///
/// # Parameters
///
/// * `repository` The registry bound to the current invocation.
/// * `msg` An instance of the transfer asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn transfer_asset<T: AssetRepository>(
    repository: &T,
    msg: TransferAssetV1,
) -> EntryPointResponse {
    let asset = repository.transfer_asset(&msg.id, &msg.new_owner_id)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(
                EventType::TransferAsset,
                &asset.id,
                &repository.context().tx_id,
            )
            .set_owner_id(&asset.owner_id)
            .set_new_value(&asset.owner),
        )
        .set_data(to_json_response(&asset)?)
        .to_ok()
}
