//! Complex structs used to perform intensive operations in a centralized location.

/// Ties the ledger deps and invocation context together into a cohesive struct that performs
/// every registry mutation.
pub mod asset_registry;
/// Defines the trait describing the mutating operations of the registry.
pub mod asset_repository;
/// Allows dynamic delegation of a [LedgerDepsMut](crate::ledger::ledger_store::LedgerDepsMut) to
/// prevent common issues that arise when the struct is moved.
pub mod deps_manager;
/// Hands out generated asset ids from the persisted counter.
pub mod id_allocator;
/// Stores and loads the provenance record of each mutating invocation.
pub mod transaction_journal;
