//! Contains all types and base functionality used to construct the logic of the contract.

/// Contains each error type emitted by the contract.
pub mod error;
/// Defines how every record kind is laid out in the key space of the ledger.
pub mod keys;
/// Contains each message taken as a request by the contract.
pub mod msg;
/// Contains the core internal storage functionalities for the contract.
pub mod state;
pub mod types;
