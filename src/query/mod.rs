//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

pub mod query_all_assets;
pub mod query_asset;
pub mod query_asset_exists;
/// Joins the ledger's per-key change log with the transaction journal.
pub mod query_asset_history;
pub mod query_state;
pub mod query_transaction_info;
pub mod query_version;
