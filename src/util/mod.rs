//! Miscellaneous functionalities that do not logically belong to a concrete group.

/// Defines various types with type aliases to shorten syntax used elsewhere in the contract code.
pub mod aliases;
/// The deterministic JSON encoding used for every value written to the ledger.
pub mod canonical_json;
/// Defines all global constant values used throughout the contract.
pub mod constants;
/// Allows dynamic delegation of a [LedgerDepsMut](crate::ledger::ledger_store::LedgerDepsMut) to
/// prevent common issues that arise when the struct is moved.
pub mod deps_container;
/// Helpers to ensure that emitting event attributes on [execute](crate::contract::execute) calls
/// occurs with standard values throughout the contract.
pub mod event_attributes;
/// Miscellaneous functions to use in various scenarios throughout the contract's execution.
pub mod functions;
/// Global traits to be used across various areas of the contract.
pub mod traits;
