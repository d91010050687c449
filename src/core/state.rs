use cosmwasm_std::{Order, Storage};
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::core::keys::{asset_key, namespace_bounds, ASSET_NAMESPACE};
use crate::core::types::asset::Asset;
use crate::util::aliases::AssetResult;
use crate::util::canonical_json::{from_canonical_slice, to_canonical_binary};
use crate::util::constants::{DEFAULT_ID_PREFIX, FIRST_ASSET_NUMBER};
use crate::util::traits::ResultExtensions;

/// Stored under a plain ascii key, outside of every registry namespace.
const STATE: Item<StateV1> = Item::new("state");

/// Contract-wide configuration, including the persisted id counter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct StateV1 {
    /// Prepended to the counter to form generated asset ids.
    pub id_prefix: String,
    /// The counter value the next generated id will try first.
    pub next_id: u64,
}
impl StateV1 {
    pub fn new<S: Into<String>>(id_prefix: S, next_id: u64) -> Self {
        StateV1 {
            id_prefix: id_prefix.into(),
            next_id,
        }
    }
}
impl Default for StateV1 {
    fn default() -> Self {
        StateV1::new(DEFAULT_ID_PREFIX, FIRST_ASSET_NUMBER)
    }
}

/// Loads the contract state, falling back to the defaults when the contract was never
/// instantiated.
pub fn config_read(storage: &dyn Storage) -> AssetResult<StateV1> {
    STATE.may_load(storage)?.unwrap_or_default().to_ok()
}

pub fn may_config_read(storage: &dyn Storage) -> AssetResult<Option<StateV1>> {
    STATE.may_load(storage)?.to_ok()
}

pub fn config_save(storage: &mut dyn Storage, state: &StateV1) -> AssetResult<()> {
    STATE.save(storage, state)?.to_ok()
}

pub fn may_load_asset(storage: &dyn Storage, id: &str) -> AssetResult<Option<Asset>> {
    match storage.get(&asset_key(id)?) {
        Some(bytes) if !bytes.is_empty() => Some(from_canonical_slice::<Asset>(&bytes)?).to_ok(),
        _ => Ok(None),
    }
}

/// Loads the live asset with the given id, failing with a not found error when it is absent.
pub fn load_asset(storage: &dyn Storage, id: &str) -> AssetResult<Asset> {
    match may_load_asset(storage, id)? {
        Some(asset) => asset.to_ok(),
        None => ContractError::asset_not_found(id).to_err(),
    }
}

/// Checks for a live asset without decoding it.
pub fn asset_exists(storage: &dyn Storage, id: &str) -> AssetResult<bool> {
    storage
        .get(&asset_key(id)?)
        .map_or(false, |bytes| !bytes.is_empty())
        .to_ok()
}

pub fn save_asset(storage: &mut dyn Storage, asset: &Asset) -> AssetResult<()> {
    storage.set(&asset_key(&asset.id)?, to_canonical_binary(asset)?.as_slice());
    Ok(())
}

pub fn remove_asset(storage: &mut dyn Storage, id: &str) -> AssetResult<()> {
    storage.remove(&asset_key(id)?);
    Ok(())
}

/// Decodes every live asset in the store's native key order.  Only the asset namespace is scanned,
/// so journal records and configuration can never appear in the result.
pub fn list_assets(storage: &dyn Storage) -> AssetResult<Vec<Asset>> {
    let (start, end) = namespace_bounds(ASSET_NAMESPACE)?;
    storage
        .range(Some(start.as_slice()), Some(end.as_slice()), Order::Ascending)
        .map(|(_, bytes)| from_canonical_slice::<Asset>(&bytes))
        .collect()
}
