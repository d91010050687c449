use crate::ledger::ledger_store::LedgerDepsMut;

/// Allows dynamic delegation of a [LedgerDepsMut] to prevent common issues that arise when the
/// struct is moved.
pub trait DepsManager<'a> {
    /// Functionally retrieves the result of a usage of the held [LedgerDepsMut] value.
    ///
    /// # Parameters
    ///
    /// * `deps_fn` A closure that receives the held [LedgerDepsMut].
    fn use_deps<T, F>(&self, deps_fn: F) -> T
    where
        F: FnMut(&mut LedgerDepsMut<'a>) -> T;

    /// Moves the held [LedgerDepsMut] back to the caller.
    fn into_deps(self) -> LedgerDepsMut<'a>;
}
