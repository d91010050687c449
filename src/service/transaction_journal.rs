use cosmwasm_std::Storage;
use tracing::debug;

use crate::core::error::ContractError;
use crate::core::keys::transaction_key;
use crate::core::types::invocation_context::InvocationContext;
use crate::core::types::transaction_record::TransactionRecord;
use crate::util::aliases::AssetResult;
use crate::util::canonical_json::{from_canonical_slice, to_canonical_binary};
use crate::util::traits::ResultExtensions;

/// Writes the provenance record of the current invocation into the journal.  Writing it again in
/// the same invocation stores identical bytes under the same key.
///
/// # Parameters
///
/// * `storage` The invocation's view of the world state.
/// * `ctx` The invocation being recorded.
/// * `deleted` Whether the invocation deleted an asset.
pub fn record_transaction(
    storage: &mut dyn Storage,
    ctx: &InvocationContext,
    deleted: bool,
) -> AssetResult<TransactionRecord> {
    let record = TransactionRecord::from_context(ctx, deleted);
    storage.set(
        &transaction_key(&record.tx_id)?,
        to_canonical_binary(&record)?.as_slice(),
    );
    debug!(tx_id = %record.tx_id, deleted, "recorded transaction");
    record.to_ok()
}

pub fn may_load_transaction(
    storage: &dyn Storage,
    tx_id: &str,
) -> AssetResult<Option<TransactionRecord>> {
    match storage.get(&transaction_key(tx_id)?) {
        Some(bytes) => Some(from_canonical_slice::<TransactionRecord>(&bytes)?).to_ok(),
        None => Ok(None),
    }
}

/// Loads a journal record, failing with a not found error when no invocation with the id was
/// recorded.
pub fn load_transaction(storage: &dyn Storage, tx_id: &str) -> AssetResult<TransactionRecord> {
    match may_load_transaction(storage, tx_id)? {
        Some(record) => record.to_ok(),
        None => ContractError::transaction_not_found(tx_id).to_err(),
    }
}
