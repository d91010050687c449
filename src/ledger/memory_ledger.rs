//! An in-memory stand-in for the replicated ledger platform.
//!
//! It reproduces the guarantees the registry relies on: each submitted invocation sees a
//! consistent view, its writes are applied all-or-nothing, and every committed write is appended
//! to the change log of its key.  Consensus, endorsement and persistence are out of its reach.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cosmwasm_std::{Binary, Order, Record, StdError, Storage};
use tracing::{debug, warn};

use crate::core::types::invocation_context::InvocationContext;
use crate::ledger::ledger_store::{HistoryQuerier, KeyModification, LedgerDeps, LedgerDepsMut};

#[derive(Default)]
pub struct MemoryLedger {
    state: BTreeMap<Vec<u8>, Vec<u8>>,
    history: BTreeMap<Vec<u8>, Vec<KeyModification>>,
    committed_tx_ids: BTreeSet<String>,
    cursors: CursorTracker,
}
impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a mutating invocation.  The closure's writes are buffered and only applied when it
    /// returns `Ok`; on `Err` the ledger is left untouched.  A transaction id may only be committed
    /// once.
    ///
    /// # Parameters
    ///
    /// * `ctx` The context of the invocation.  Its tx id and timestamp are stamped on every change
    /// log entry produced by the commit.
    /// * `invocation` Receives ledger deps scoped to this invocation.
    pub fn submit<T, E, F>(&mut self, ctx: &InvocationContext, invocation: F) -> Result<T, E>
    where
        E: From<StdError>,
        F: FnOnce(LedgerDepsMut<'_>) -> Result<T, E>,
    {
        if self.committed_tx_ids.contains(&ctx.tx_id) {
            warn!(tx_id = %ctx.tx_id, "rejecting duplicate transaction id");
            return Err(StdError::generic_err(format!(
                "transaction {} has already been committed",
                ctx.tx_id
            ))
            .into());
        }
        let (result, writes) = {
            let ledger: &MemoryLedger = self;
            let mut simulator = TxSimulator::new(ledger);
            let result = invocation(LedgerDepsMut {
                storage: &mut simulator,
                history: ledger,
            });
            (result, simulator.writes)
        };
        match result {
            Ok(_) => self.commit(ctx, writes),
            Err(_) => debug!(
                tx_id = %ctx.tx_id,
                discarded_writes = writes.len(),
                "invocation failed, write set discarded"
            ),
        }
        result
    }

    /// Executes a read-only invocation against committed state.  Writes attempted by the closure
    /// are discarded.  Any number of evaluations may run at the same time.
    pub fn evaluate<T, F>(&self, query: F) -> T
    where
        F: FnOnce(LedgerDeps<'_>) -> T,
    {
        let simulator = TxSimulator::new(self);
        query(LedgerDeps {
            storage: &simulator,
            history: self,
        })
    }

    /// All committed key/value pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.state
            .iter()
            .map(|(key, value)| (key.as_slice(), value.as_slice()))
    }

    /// The number of range or history cursors that have been opened and not yet released.
    pub fn open_cursors(&self) -> usize {
        self.cursors.open()
    }

    fn commit(&mut self, ctx: &InvocationContext, writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>) {
        debug!(tx_id = %ctx.tx_id, writes = writes.len(), "committing invocation");
        for (key, write) in writes {
            let modification = match write {
                Some(value) => {
                    self.state.insert(key.clone(), value.clone());
                    KeyModification {
                        tx_id: ctx.tx_id.clone(),
                        timestamp: ctx.timestamp,
                        value: Binary::from(value),
                        is_delete: false,
                    }
                }
                None => {
                    self.state.remove(&key);
                    KeyModification {
                        tx_id: ctx.tx_id.clone(),
                        timestamp: ctx.timestamp,
                        value: Binary::default(),
                        is_delete: true,
                    }
                }
            };
            self.history.entry(key).or_default().push(modification);
        }
        self.committed_tx_ids.insert(ctx.tx_id.clone());
    }
}
impl HistoryQuerier for MemoryLedger {
    fn history_for<'a>(&'a self, key: &[u8]) -> Box<dyn Iterator<Item = KeyModification> + 'a> {
        let modifications = self.history.get(key).cloned().unwrap_or_default();
        Box::new(self.cursors.track(modifications.into_iter()))
    }
}

/// Overlays one invocation's pending writes on top of committed state.  `None` marks a removal.
struct TxSimulator<'a> {
    ledger: &'a MemoryLedger,
    writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}
impl<'a> TxSimulator<'a> {
    fn new(ledger: &'a MemoryLedger) -> Self {
        Self {
            ledger,
            writes: BTreeMap::new(),
        }
    }
}
impl Storage for TxSimulator<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.writes.get(key) {
            Some(pending) => pending.clone(),
            None => self.ledger.state.get(key).cloned(),
        }
    }

    fn range<'b>(
        &'b self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'b> {
        if let (Some(start), Some(end)) = (start, end) {
            if start >= end {
                return Box::new(self.ledger.cursors.track(Vec::<Record>::new().into_iter()));
            }
        }
        let bounds = (
            start.map_or(Bound::Unbounded, Bound::Included),
            end.map_or(Bound::Unbounded, Bound::Excluded),
        );
        let mut merged = self
            .ledger
            .state
            .range::<[u8], _>(bounds)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect::<BTreeMap<_, _>>();
        for (key, pending) in self.writes.range::<[u8], _>(bounds) {
            match pending {
                Some(value) => merged.insert(key.clone(), value.clone()),
                None => merged.remove(key),
            };
        }
        let mut records = merged.into_iter().collect::<Vec<Record>>();
        if order == Order::Descending {
            records.reverse();
        }
        Box::new(self.ledger.cursors.track(records.into_iter()))
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
    }

    fn remove(&mut self, key: &[u8]) {
        self.writes.insert(key.to_vec(), None);
    }
}

#[derive(Clone, Default)]
struct CursorTracker {
    open: Arc<AtomicUsize>,
}
impl CursorTracker {
    fn track<I: Iterator>(&self, inner: I) -> TrackedCursor<I> {
        self.open.fetch_add(1, Ordering::SeqCst);
        TrackedCursor {
            inner,
            open: Arc::clone(&self.open),
        }
    }

    fn open(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }
}

/// Releases its slot in the tracker when dropped, whatever path the consumer exits through.
struct TrackedCursor<I> {
    inner: I,
    open: Arc<AtomicUsize>,
}
impl<I: Iterator> Iterator for TrackedCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
impl<I> Drop for TrackedCursor<I> {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{Order, StdError, Storage};

    use crate::testutil::test_utilities::{context_at, david};

    use super::MemoryLedger;

    #[test]
    fn test_submit_commits_writes_and_history() {
        let mut ledger = MemoryLedger::new();
        let ctx = context_at("tx-1", 10, david());
        ledger
            .submit(&ctx, |deps| {
                deps.storage.set(b"k1", b"v1");
                deps.storage.set(b"k2", b"v2");
                Ok::<_, StdError>(())
            })
            .expect("the invocation should commit");
        assert_eq!(
            vec![(&b"k1"[..], &b"v1"[..]), (&b"k2"[..], &b"v2"[..])],
            ledger.entries().collect::<Vec<_>>(),
            "both writes should be committed",
        );
        let history = ledger.evaluate(|deps| deps.history.history_for(b"k1").collect::<Vec<_>>());
        assert_eq!(1, history.len(), "a single change log entry should exist");
        assert_eq!("tx-1", history[0].tx_id);
        assert_eq!(ctx.timestamp, history[0].timestamp);
        assert!(!history[0].is_delete);
    }

    #[test]
    fn test_failed_invocation_leaves_no_trace() {
        let mut ledger = MemoryLedger::new();
        let result = ledger.submit(&context_at("tx-1", 10, david()), |deps| {
            deps.storage.set(b"k1", b"v1");
            Err::<(), _>(StdError::generic_err("validation failed late"))
        });
        assert!(result.is_err(), "the closure error should be returned");
        assert_eq!(0, ledger.entries().count(), "no writes should be applied");
        let history_len = ledger.evaluate(|deps| deps.history.history_for(b"k1").count());
        assert_eq!(0, history_len, "no change log entry should be created");
        // the failed transaction id was never committed, so it may be retried
        ledger
            .submit(&context_at("tx-1", 11, david()), |deps| {
                deps.storage.set(b"k1", b"v1");
                Ok::<_, StdError>(())
            })
            .expect("a retry with the same id should be accepted after a failure");
    }

    #[test]
    fn test_duplicate_transaction_id_is_rejected() {
        let mut ledger = MemoryLedger::new();
        let ctx = context_at("tx-1", 10, david());
        ledger
            .submit(&ctx, |_| Ok::<_, StdError>(()))
            .expect("the first submission should succeed");
        let error = ledger
            .submit(&ctx, |deps| {
                deps.storage.set(b"k", b"v");
                Ok::<_, StdError>(())
            })
            .unwrap_err();
        assert!(
            error.to_string().contains("already been committed"),
            "unexpected error: {}",
            error,
        );
        assert_eq!(0, ledger.entries().count());
    }

    #[test]
    fn test_invocation_reads_its_own_writes() {
        let mut ledger = MemoryLedger::new();
        ledger
            .submit(&context_at("tx-1", 1, david()), |deps| {
                deps.storage.set(b"a", b"1");
                deps.storage.set(b"b", b"2");
                Ok::<_, StdError>(())
            })
            .unwrap();
        ledger
            .submit(&context_at("tx-2", 2, david()), |deps| {
                deps.storage.remove(b"a");
                deps.storage.set(b"c", b"3");
                assert_eq!(None, deps.storage.get(b"a"));
                assert_eq!(Some(b"3".to_vec()), deps.storage.get(b"c"));
                let keys = deps
                    .storage
                    .range(None, None, Order::Ascending)
                    .map(|(key, _)| key)
                    .collect::<Vec<_>>();
                assert_eq!(vec![b"b".to_vec(), b"c".to_vec()], keys);
                // the change log only reflects committed transactions
                assert_eq!(0, deps.history.history_for(b"c").count());
                Ok::<_, StdError>(())
            })
            .unwrap();
        let history = ledger.evaluate(|deps| deps.history.history_for(b"a").collect::<Vec<_>>());
        assert_eq!(2, history.len());
        assert!(history[1].is_delete, "the removal should be the terminal entry");
        assert!(history[1].value.is_empty());
    }

    #[test]
    fn test_range_bounds_and_order() {
        let mut ledger = MemoryLedger::new();
        ledger
            .submit(&context_at("tx-1", 1, david()), |deps| {
                for key in [b"a", b"b", b"c", b"d"] {
                    deps.storage.set(key, b"x");
                }
                Ok::<_, StdError>(())
            })
            .unwrap();
        let (ascending, descending, empty) = ledger.evaluate(|deps| {
            let keys = |order| {
                deps.storage
                    .range(Some(&b"b"[..]), Some(&b"d"[..]), order)
                    .map(|(key, _)| key)
                    .collect::<Vec<_>>()
            };
            let empty = deps.storage.range(Some(&b"d"[..]), Some(&b"b"[..]), Order::Ascending).count();
            (keys(Order::Ascending), keys(Order::Descending), empty)
        });
        assert_eq!(vec![b"b".to_vec(), b"c".to_vec()], ascending);
        assert_eq!(vec![b"c".to_vec(), b"b".to_vec()], descending);
        assert_eq!(0, empty, "inverted bounds should produce an empty cursor");
        assert_eq!(0, ledger.open_cursors());
    }

    #[test]
    fn test_cursors_are_released_on_early_termination() {
        let mut ledger = MemoryLedger::new();
        ledger
            .submit(&context_at("tx-1", 1, david()), |deps| {
                deps.storage.set(b"a", b"1");
                deps.storage.set(b"b", b"2");
                Ok::<_, StdError>(())
            })
            .unwrap();
        ledger.evaluate(|deps| {
            let mut cursor = deps.storage.range(None, None, Order::Ascending);
            assert!(cursor.next().is_some());
            let mut history = deps.history.history_for(b"a");
            assert!(history.next().is_some());
            assert_eq!(2, ledger.open_cursors(), "both cursors should be open");
        });
        assert_eq!(
            0,
            ledger.open_cursors(),
            "cursors should be released once dropped, even when partially consumed",
        );
    }
}
