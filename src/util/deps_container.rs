use std::cell::RefCell;

use crate::ledger::ledger_store::LedgerDepsMut;

/// Holds the [LedgerDepsMut] of an invocation, which allows it to be shared by the sub-objects of
/// a service without the service itself being mutable, and then freed when required.
pub struct DepsContainer<'a> {
    deps_cell: RefCell<LedgerDepsMut<'a>>,
}
impl<'a> DepsContainer<'a> {
    /// Constructs a new instance of the DepsContainer.
    /// # Example
    /// ```
    /// use asset_registry_chaincode::ledger::ledger_store::LedgerDepsMut;
    /// use asset_registry_chaincode::ledger::memory_ledger::MemoryLedger;
    /// use asset_registry_chaincode::util::deps_container::DepsContainer;
    /// use cosmwasm_std::testing::MockStorage;
    /// use cosmwasm_std::Storage;
    ///
    /// let ledger = MemoryLedger::new();
    /// let mut storage = MockStorage::new();
    /// let container = DepsContainer::new(LedgerDepsMut {
    ///     storage: &mut storage,
    ///     history: &ledger,
    /// });
    /// container.use_deps(|deps| deps.storage.set(b"key", b"value"));
    /// let deps = container.get();
    /// assert_eq!(Some(b"value".to_vec()), deps.storage.get(b"key"));
    /// ```
    pub fn new(deps: LedgerDepsMut<'a>) -> Self {
        Self {
            deps_cell: RefCell::new(deps),
        }
    }

    /// Allows the encapsulated deps to be used while the service owns them.
    /// Note: In order to release the owned deps, simply call self.get()
    pub fn use_deps<T, F>(&self, mut deps_fn: F) -> T
    where
        F: FnMut(&mut LedgerDepsMut<'a>) -> T,
    {
        deps_fn(&mut self.deps_cell.borrow_mut())
    }

    /// Relinquishes the held deps to the caller
    pub fn get(self) -> LedgerDepsMut<'a> {
        self.deps_cell.into_inner()
    }
}
