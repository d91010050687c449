use cosmwasm_std::{StdError, Storage};

use crate::core::state::{config_read, config_save};
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// Hands out asset ids of the form `<prefix><counter>`.  The counter is loaded from and saved to the
/// contract state, so every replica derives the same ids from the same ledger contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdAllocator {
    prefix: String,
    next: u64,
}
impl IdAllocator {
    pub fn new<S: Into<String>>(prefix: S, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next,
        }
    }

    /// Loads the allocator from the persisted contract state.
    pub fn load(storage: &dyn Storage) -> AssetResult<Self> {
        let state = config_read(storage)?;
        Self::new(state.id_prefix, state.next_id).to_ok()
    }

    /// Produces the first candidate id that is not taken, advancing the counter past every
    /// candidate it tries.
    ///
    /// # Parameters
    ///
    /// * `is_taken` Decides whether a candidate id is already in use.  Any error it returns aborts
    /// the allocation.
    pub fn allocate<F>(&mut self, mut is_taken: F) -> AssetResult<String>
    where
        F: FnMut(&str) -> AssetResult<bool>,
    {
        loop {
            let candidate = format!("{}{}", self.prefix, self.next);
            self.next = self.next.checked_add(1).ok_or_else(|| {
                StdError::generic_err(format!(
                    "the asset id counter for prefix [{}] is exhausted",
                    self.prefix
                ))
            })?;
            if !is_taken(&candidate)? {
                return candidate.to_ok();
            }
        }
    }

    /// Persists the counter so the next invocation resumes where this one stopped.
    pub fn save(&self, storage: &mut dyn Storage) -> AssetResult<()> {
        let mut state = config_read(storage)?;
        state.next_id = self.next;
        config_save(storage, &state)
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;

    use crate::core::error::ContractError;
    use crate::core::state::{config_read, config_save, StateV1};
    use crate::util::traits::ResultExtensions;

    use super::IdAllocator;

    #[test]
    fn test_allocate_skips_taken_ids() {
        let mut allocator = IdAllocator::new("asset", 1);
        let id = allocator
            .allocate(|candidate| (candidate == "asset1" || candidate == "asset2").to_ok())
            .expect("allocation should succeed");
        assert_eq!("asset3", id, "taken candidates should be skipped");
        assert_eq!(
            IdAllocator::new("asset", 4),
            allocator,
            "the counter should sit just past the id that was handed out",
        );
        let id = allocator.allocate(|_| false.to_ok()).unwrap();
        assert_eq!("asset4", id, "the counter should continue from the last candidate");
    }

    #[test]
    fn test_load_and_save_use_contract_state() {
        let mut storage = MockStorage::new();
        config_save(&mut storage, &StateV1::new("item", 7)).unwrap();
        let mut allocator = IdAllocator::load(&storage).expect("loading should succeed");
        assert_eq!("item7", allocator.allocate(|_| false.to_ok()).unwrap());
        allocator.save(&mut storage).expect("saving should succeed");
        assert_eq!(StateV1::new("item", 8), config_read(&storage).unwrap());
    }

    #[test]
    fn test_predicate_errors_abort_allocation() {
        let mut allocator = IdAllocator::new("asset", 1);
        let error = allocator
            .allocate(|candidate| ContractError::asset_not_found(candidate).to_err())
            .unwrap_err();
        assert!(matches!(error, ContractError::NotFound { .. }));
    }

    #[test]
    fn test_counter_overflow_is_an_error() {
        let mut allocator = IdAllocator::new("asset", u64::MAX);
        let error = allocator.allocate(|_| false.to_ok()).unwrap_err();
        assert!(
            matches!(error, ContractError::Std(_)),
            "expected a std error on counter overflow, but got: {:?}",
            error,
        );
    }
}
