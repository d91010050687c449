use crate::core::types::asset::{Asset, AssetInput};
use crate::core::types::invocation_context::InvocationContext;
use crate::util::aliases::AssetResult;

/// The mutating operations of the registry.  Every operation validates its input and the caller's
/// ownership before it writes anything, and records the invocation in the transaction journal.
pub trait AssetRepository {
    /// The invocation every operation of this repository is performed for.
    fn context(&self) -> &InvocationContext;

    /// Registers a new asset owned by the caller.  A provided id must not belong to a live asset;
    /// a missing id is generated.
    fn create_asset(&self, input: AssetInput) -> AssetResult<Asset>;

    /// Replaces every attribute of the caller's asset.  The reserved fields are kept as stored.
    fn update_asset(&self, input: AssetInput) -> AssetResult<Asset>;

    /// Removes the caller's asset from the current state and returns the id of the invocation.
    fn delete_asset(&self, id: &str) -> AssetResult<String>;

    /// Hands the caller's asset over to the holder of `new_owner_id`.
    fn transfer_asset(&self, id: &str, new_owner_id: &str) -> AssetResult<Asset>;

    /// Loads a live asset, verifying that the caller owns it.
    fn load_owned_asset(&self, id: &str) -> AssetResult<Asset>;
}
