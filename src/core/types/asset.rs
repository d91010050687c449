use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::ContractError;
use crate::core::types::invocation_context::CallerIdentity;
use crate::util::aliases::AssetResult;
use crate::util::constants::{ASSET_ID_FIELD, ASSET_OWNER_FIELD, ASSET_OWNER_ID_FIELD};
use crate::util::traits::ResultExtensions;

/// An entity tracked by the registry.  The reserved fields are fixed, while every other field of
/// the stored JSON object lands in `attributes` and is serialized flat next to them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Asset {
    /// Unique and immutable after creation.
    pub id: String,
    /// Display name of the current owner.
    pub owner: String,
    /// Full identity of the current owner.  Only changed by a transfer.
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    /// Domain-specific fields, freely replaced by the owner through an update.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}
impl Asset {
    /// Constructs an asset owned by the given identity.  Fails when the identity does not embed a
    /// display name.
    pub fn owned_by<S: Into<String>>(
        id: S,
        owner: &CallerIdentity,
        attributes: BTreeMap<String, Value>,
    ) -> AssetResult<Self> {
        Self {
            id: id.into(),
            owner: owner.display_name()?,
            owner_id: owner.id.clone(),
            attributes,
        }
        .to_ok()
    }

    pub fn is_owned_by(&self, caller: &CallerIdentity) -> bool {
        self.owner_id == caller.id
    }
}

/// A caller-provided asset payload after its reserved fields have been checked.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetInput {
    pub id: Option<String>,
    pub attributes: BTreeMap<String, Value>,
}
impl AssetInput {
    /// Parses a serialized asset payload.  This never touches the store, so a malformed payload is
    /// always rejected before any read or write happens.
    ///
    /// # Parameters
    ///
    /// * `message_type` Names the message being parsed, for error reporting.
    /// * `json` The raw payload.  Must be a JSON object.  `id` must be a non-blank string when
    /// present, and `owner`/`ownerId` must be strings when present.  Their values are discarded
    /// because ownership always derives from an identity.
    pub fn parse(message_type: &str, json: &str) -> AssetResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            ContractError::malformed(message_type, format!("asset payload is not valid JSON: {e}"))
        })?;
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return ContractError::malformed(
                    message_type,
                    format!("asset payload must be a JSON object, but got: {other}"),
                )
                .to_err()
            }
        };
        let id = match fields.remove(ASSET_ID_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) if !id.trim().is_empty() => Some(id),
            Some(Value::String(_)) => {
                return ContractError::malformed(message_type, "id: must not be blank").to_err()
            }
            Some(other) => {
                return ContractError::malformed(
                    message_type,
                    format!("id: must be a string, but got: {other}"),
                )
                .to_err()
            }
        };
        for reserved in [ASSET_OWNER_FIELD, ASSET_OWNER_ID_FIELD] {
            match fields.remove(reserved) {
                None | Some(Value::Null) | Some(Value::String(_)) => {}
                Some(other) => {
                    return ContractError::malformed(
                        message_type,
                        format!("{reserved}: must be a string, but got: {other}"),
                    )
                    .to_err()
                }
            }
        }
        Self {
            id,
            attributes: fields.into_iter().collect(),
        }
        .to_ok()
    }
}
