use cosmwasm_std::Response;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::asset::AssetInput;
use crate::service::asset_repository::AssetRepository;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::to_json_response;
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
/// for ease of use in the underlying [create_asset](self::create_asset) function.
///
/// # Parameters
///
/// * `input` The parsed asset payload.  Its id is generated when absent.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateAssetV1 {
    pub input: AssetInput,
}
impl CreateAssetV1 {
    pub fn new(input: AssetInput) -> Self {
        Self { input }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset) variant, then
    /// an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType) error will be
    /// returned.  A payload that does not parse yields a
    /// [MalformedInput](crate::core::error::ContractError::MalformedInput) error.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<CreateAssetV1> {
        match msg {
            ExecuteMsg::CreateAsset { asset } => {
                CreateAssetV1::new(AssetInput::parse("ExecuteMsg::CreateAsset", &asset)?).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::CreateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset).
/// Registers a new asset owned by the caller and responds with the stored asset as JSON data.
///
/// # Parameters
///
/// * `repository` The registry bound to the current invocation.
/// * `msg` An instance of the create asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn create_asset<T: AssetRepository>(repository: &T, msg: CreateAssetV1) -> EntryPointResponse {
    let asset = repository.create_asset(msg.input)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(
                EventType::CreateAsset,
                &asset.id,
                &repository.context().tx_id,
            )
            .set_owner_id(&asset.owner_id),
        )
        .set_data(to_json_response(&asset)?)
        .to_ok()
}
