use cosmwasm_std::Response;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::asset::AssetInput;
use crate::service::asset_repository::AssetRepository;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::to_json_response;
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::UpdateAsset](crate::core::msg::ExecuteMsg::UpdateAsset)
/// for ease of use in the underlying [update_asset](self::update_asset) function.
///
/// # Parameters
///
/// * `input` The parsed asset payload.  Its id selects the asset to update.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateAssetV1 {
    pub input: AssetInput,
}
impl UpdateAssetV1 {
    pub fn new(input: AssetInput) -> Self {
        Self { input }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [UpdateAsset](crate::core::msg::ExecuteMsg::UpdateAsset) variant, then
    /// an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType) error will be
    /// returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<UpdateAssetV1> {
        match msg {
            ExecuteMsg::UpdateAsset { asset } => {
                UpdateAssetV1::new(AssetInput::parse("ExecuteMsg::UpdateAsset", &asset)?).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::UpdateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::UpdateAsset](crate::core::msg::ExecuteMsg::UpdateAsset).
/// Only the asset's owner may replace its attributes.  The updated asset is returned as JSON data.
///
/// # Parameters
///
/// * `repository` The registry bound to the current invocation.
/// * `msg` An instance of the update asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn update_asset<T: AssetRepository>(repository: &T, msg: UpdateAssetV1) -> EntryPointResponse {
    let asset = repository.update_asset(msg.input)?;
    Response::new()
        .add_attributes(EventAttributes::for_asset_event(
            EventType::UpdateAsset,
            &asset.id,
            &repository.context().tx_id,
        ))
        .set_data(to_json_response(&asset)?)
        .to_ok()
}
