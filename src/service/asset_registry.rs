use std::cell::RefCell;

use tracing::debug;

use crate::core::error::ContractError;
use crate::core::keys::asset_key;
use crate::core::state::{asset_exists, load_asset, remove_asset, save_asset};
use crate::core::types::asset::{Asset, AssetInput};
use crate::core::types::invocation_context::{display_name_from_identity, InvocationContext};
use crate::ledger::ledger_store::LedgerDepsMut;
use crate::service::asset_repository::AssetRepository;
use crate::service::deps_manager::DepsManager;
use crate::service::id_allocator::IdAllocator;
use crate::service::transaction_journal::record_transaction;
use crate::util::aliases::AssetResult;
use crate::util::deps_container::DepsContainer;
use crate::util::traits::ResultExtensions;

/// Ties the ledger deps of one invocation to the context describing it, and carries out every
/// registry mutation on the caller's behalf.
pub struct AssetRegistry<'a> {
    deps: DepsContainer<'a>,
    ctx: InvocationContext,
    // Loaded on the first generated id and kept for the rest of the invocation, so that several
    // allocations never rely on reading back the counter that was just written.
    allocator: RefCell<Option<IdAllocator>>,
}
impl<'a> AssetRegistry<'a> {
    pub fn new(deps: LedgerDepsMut<'a>, ctx: &InvocationContext) -> Self {
        Self {
            deps: DepsContainer::new(deps),
            ctx: ctx.clone(),
            allocator: RefCell::new(None),
        }
    }

    /// An id is taken while an asset holds it, and forever after once it appears in the ledger's
    /// change log, so deleted assets never have their ids handed out again.
    fn is_id_taken(&self, id: &str) -> AssetResult<bool> {
        self.use_deps(|deps| {
            if asset_exists(deps.storage, id)? {
                return true.to_ok();
            }
            let mut history = deps.history.history_for(&asset_key(id)?);
            history.next().is_some().to_ok()
        })
    }

    fn generate_id(&self) -> AssetResult<(String, IdAllocator)> {
        let taken = self.allocator.borrow_mut().take();
        let mut allocator = match taken {
            Some(allocator) => allocator,
            None => self.use_deps(|deps| IdAllocator::load(deps.storage))?,
        };
        let id = allocator.allocate(|candidate| self.is_id_taken(candidate))?;
        (id, allocator).to_ok()
    }
}
impl<'a> DepsManager<'a> for AssetRegistry<'a> {
    fn use_deps<T, F>(&self, deps_fn: F) -> T
    where
        F: FnMut(&mut LedgerDepsMut<'a>) -> T,
    {
        self.deps.use_deps(deps_fn)
    }

    fn into_deps(self) -> LedgerDepsMut<'a> {
        self.deps.get()
    }
}
impl<'a> AssetRepository for AssetRegistry<'a> {
    fn context(&self) -> &InvocationContext {
        &self.ctx
    }

    fn create_asset(&self, input: AssetInput) -> AssetResult<Asset> {
        let (id, allocator) = match input.id {
            Some(id) => {
                if self.use_deps(|deps| asset_exists(deps.storage, &id))? {
                    return ContractError::AlreadyExists { id }.to_err();
                }
                (id, None)
            }
            None => {
                let (id, allocator) = self.generate_id()?;
                (id, Some(allocator))
            }
        };
        let asset = Asset::owned_by(id, &self.ctx.caller, input.attributes)?;
        self.use_deps(|deps| {
            if let Some(allocator) = &allocator {
                allocator.save(deps.storage)?;
            }
            save_asset(deps.storage, &asset)?;
            record_transaction(deps.storage, &self.ctx, false)
        })?;
        if allocator.is_some() {
            self.allocator.replace(allocator);
        }
        debug!(asset_id = %asset.id, tx_id = %self.ctx.tx_id, "created asset");
        asset.to_ok()
    }

    fn update_asset(&self, input: AssetInput) -> AssetResult<Asset> {
        let id = input.id.ok_or_else(|| {
            ContractError::malformed("UpdateAsset", "id: must be provided to select the asset")
        })?;
        let mut asset = self.load_owned_asset(&id)?;
        asset.attributes = input.attributes;
        self.use_deps(|deps| {
            save_asset(deps.storage, &asset)?;
            record_transaction(deps.storage, &self.ctx, false)
        })?;
        debug!(asset_id = %asset.id, tx_id = %self.ctx.tx_id, "updated asset");
        asset.to_ok()
    }

    fn delete_asset(&self, id: &str) -> AssetResult<String> {
        let asset = self.load_owned_asset(id)?;
        let record = self.use_deps(|deps| {
            remove_asset(deps.storage, &asset.id)?;
            record_transaction(deps.storage, &self.ctx, true)
        })?;
        debug!(asset_id = %asset.id, tx_id = %record.tx_id, "deleted asset");
        record.tx_id.to_ok()
    }

    fn transfer_asset(&self, id: &str, new_owner_id: &str) -> AssetResult<Asset> {
        let mut asset = self.load_owned_asset(id)?;
        asset.owner = display_name_from_identity(new_owner_id)?;
        asset.owner_id = new_owner_id.to_string();
        self.use_deps(|deps| {
            save_asset(deps.storage, &asset)?;
            record_transaction(deps.storage, &self.ctx, false)
        })?;
        debug!(asset_id = %asset.id, tx_id = %self.ctx.tx_id, "transferred asset");
        asset.to_ok()
    }

    fn load_owned_asset(&self, id: &str) -> AssetResult<Asset> {
        let asset = self.use_deps(|deps| load_asset(deps.storage, id))?;
        if !asset.is_owned_by(&self.ctx.caller) {
            return ContractError::Unauthorized {
                id: asset.id,
                caller: self.ctx.caller.id.clone(),
            }
            .to_err();
        }
        asset.to_ok()
    }
}
