use cosmwasm_std::{Binary, Storage, Timestamp};

/// A single entry in the change log of one key, as committed by the ledger platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyModification {
    pub tx_id: String,
    pub timestamp: Timestamp,
    /// The value written by the transaction.  Empty when the transaction deleted the key.
    pub value: Binary,
    pub is_delete: bool,
}

/// Read access to the per-key change log kept by the ledger platform.  Only committed
/// transactions appear in the log, oldest first.
pub trait HistoryQuerier {
    /// Opens a cursor over the change log of `key`.  The cursor holds platform resources until it
    /// is dropped.
    fn history_for<'a>(&'a self, key: &[u8]) -> Box<dyn Iterator<Item = KeyModification> + 'a>;
}

/// Mutable access to the ledger for one invocation: the world state through the cosmwasm
/// [Storage] trait, plus the change log.
pub struct LedgerDepsMut<'a> {
    pub storage: &'a mut dyn Storage,
    pub history: &'a dyn HistoryQuerier,
}

/// Read-only access to the ledger for queries.
#[derive(Clone, Copy)]
pub struct LedgerDeps<'a> {
    pub storage: &'a dyn Storage,
    pub history: &'a dyn HistoryQuerier,
}
