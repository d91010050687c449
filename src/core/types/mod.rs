//! Contains all structs used to drive core functionality throughout the contract.

/// Defines the entity tracked by the registry, along with the parsed form of caller payloads.
pub mod asset;
pub mod asset_history_entry;
/// Describes the caller and the ledger-provided details of a single invocation.
pub mod invocation_context;
/// Defines the provenance record stored in the journal for every mutating invocation.
pub mod transaction_record;
