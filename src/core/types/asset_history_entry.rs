use cosmwasm_std::Timestamp;
use serde::{Deserialize, Serialize};

use crate::core::types::asset::Asset;
use crate::core::types::transaction_record::TransactionRecord;

/// One version of an asset, joined with the journal record of the invocation that produced it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetHistoryEntry {
    /// Taken from the ledger's change log for the asset key.
    pub tx_id: String,
    /// Taken from the ledger's change log for the asset key.
    pub timestamp: Timestamp,
    /// True for the entry recording the asset's deletion.
    pub is_delete: bool,
    pub transaction: TransactionRecord,
    /// The asset as it was stored by this version.  Absent for a deletion.
    pub value: Option<Asset>,
}
