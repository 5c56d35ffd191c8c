//! In-memory ledger backend using `DashMap`.
//!
//! State is lost when the process exits. Range scans take a sorted snapshot
//! of the matching entries, so writes made while a cursor is open are not
//! visible through it.

use super::{KeyValue, LedgerStub, StateQueryIterator};
use crate::{Error, Result};
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory world state.
///
/// Thread-safe; point operations go straight to a `DashMap`. The ledger
/// counts cursors that have been opened but not closed, see
/// [`MemoryLedger::open_iterators`].
///
/// # Example
///
/// ```rust
/// use trade_ledger::ledger::{LedgerStub, MemoryLedger};
///
/// # async fn example() -> trade_ledger::Result<()> {
/// let ledger = MemoryLedger::new();
/// ledger.put_state("TRADE7", b"{\"date\":\"x\",\"values\":[]}".to_vec()).await?;
/// assert!(ledger.get_state("TRADE7").await?.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryLedger {
    state: DashMap<String, Vec<u8>>,
    open_iterators: Arc<AtomicUsize>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DashMap::new(),
            open_iterators: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: DashMap::with_capacity(capacity),
            open_iterators: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of keys in the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Whether the ledger holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Remove every key.
    pub fn clear(&self) {
        self.state.clear();
    }

    /// Number of range cursors opened and not yet closed.
    #[must_use]
    pub fn open_iterators(&self) -> usize {
        self.open_iterators.load(Ordering::SeqCst)
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn in_range(key: &str, start: &str, end: &str) -> bool {
    key >= start && (end.is_empty() || key < end)
}

impl LedgerStub for MemoryLedger {
    type Iter = MemoryRangeIterator;

    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.state.get(key).map(|v| v.value().clone()))
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        if key.is_empty() {
            return Err(Error::Backend("key must not be an empty string".to_string()));
        }
        self.state.insert(key.to_string(), value);
        Ok(())
    }

    async fn get_state_by_range(&self, start: &str, end: &str) -> Result<MemoryRangeIterator> {
        let mut entries: Vec<KeyValue> = self
            .state
            .iter()
            .filter(|entry| in_range(entry.key(), start, end))
            .map(|entry| KeyValue::new(entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_unstable_by(|a, b| a.key.cmp(&b.key));

        self.open_iterators.fetch_add(1, Ordering::SeqCst);
        Ok(MemoryRangeIterator {
            entries: entries.into(),
            closed: false,
            open_iterators: Arc::clone(&self.open_iterators),
        })
    }
}

/// Cursor over a sorted snapshot taken by [`MemoryLedger`].
#[derive(Debug)]
pub struct MemoryRangeIterator {
    entries: VecDeque<KeyValue>,
    closed: bool,
    open_iterators: Arc<AtomicUsize>,
}

impl StateQueryIterator for MemoryRangeIterator {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    fn next_entry(&mut self) -> Result<KeyValue> {
        if self.closed {
            return Err(Error::Backend("range iterator is closed".to_string()));
        }
        self.entries
            .pop_front()
            .ok_or_else(|| Error::Backend("range iterator is exhausted".to_string()))
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            self.entries.clear();
            self.open_iterators.fetch_sub(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
