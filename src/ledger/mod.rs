//! The seam between the registry and the ledger platform it runs on.

/// Defines the interfaces the registry consumes from the ledger.
pub mod ledger_store;
pub mod memory_ledger;
