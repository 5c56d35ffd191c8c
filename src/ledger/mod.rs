//! Ledger backend interface
//!
//! The host peer owns the world state. The contract only sees it through
//! [`LedgerStub`], which offers point reads, point writes and ordered range
//! scans. [`MemoryLedger`] is an in-process implementation for tests and demos.
//!
//! # Example
//!
//! ```rust,no_run
//! use trade_ledger::ledger::{LedgerStub, MemoryLedger, RangeScan};
//!
//! # async fn example() -> trade_ledger::Result<()> {
//! let ledger = MemoryLedger::new();
//!
//! ledger.put_state("TRADE0", b"{}".to_vec()).await?;
//! assert_eq!(ledger.get_state("TRADE0").await?, Some(b"{}".to_vec()));
//!
//! let scan = RangeScan::new(ledger.get_state_by_range("TRADE0", "TRADE99999").await?);
//! for entry in scan {
//!     let entry = entry?;
//!     println!("{} => {} bytes", entry.key, entry.value.len());
//! }
//! # Ok(())
//! # }
//! ```

mod memory;

pub use memory::{MemoryLedger, MemoryRangeIterator};

use crate::Result;
use std::future::Future;
use tracing::warn;

/// One entry produced by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Ledger key
    pub key: String,
    /// Raw stored bytes
    pub value: Vec<u8>,
}

impl KeyValue {
    /// Create a new entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Cursor over the result of [`LedgerStub::get_state_by_range`].
///
/// The cursor is finite and cannot be restarted. It holds backend resources
/// until [`close`](StateQueryIterator::close) is called.
pub trait StateQueryIterator: Send {
    /// Whether another entry is available.
    fn has_next(&self) -> bool;

    /// Advance and return the next entry.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails to produce the entry or the cursor
    /// is exhausted or closed.
    fn next_entry(&mut self) -> Result<KeyValue>;

    /// Release the cursor.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails to release the cursor.
    fn close(&mut self) -> Result<()>;
}

/// World-state access offered by the host peer.
///
/// A handle is passed explicitly into every contract operation. Atomicity of a
/// single get or put, and isolation between concurrent invocations, are the
/// backend's responsibility.
pub trait LedgerStub: Send + Sync {
    /// Cursor type returned by range scans.
    type Iter: StateQueryIterator;

    /// Read the value stored at `key`.
    ///
    /// Returns `None` if the key has never been written.
    fn get_state(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// Write `value` at `key`, overwriting any previous value.
    fn put_state(&self, key: &str, value: Vec<u8>) -> impl Future<Output = Result<()>> + Send;

    /// Open a scan over keys in `[start, end)`, ascending.
    ///
    /// An empty `start` or `end` leaves that side of the range unbounded.
    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> impl Future<Output = Result<Self::Iter>> + Send;
}

/// Close-on-drop wrapper around a [`StateQueryIterator`].
///
/// Iterating yields `Result<KeyValue>` and stops after the first error. The
/// cursor is closed exactly once: on that first error, through
/// [`RangeScan::close`], or when the guard is dropped, so an early `?` return
/// never leaks it.
pub struct RangeScan<I: StateQueryIterator> {
    inner: I,
    closed: bool,
}

impl<I: StateQueryIterator> RangeScan<I> {
    /// Take ownership of an open cursor.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Close the cursor now and report the backend's answer.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails to release the cursor.
    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.inner.close()
    }
}

impl<I: StateQueryIterator> Iterator for RangeScan<I> {
    type Item = Result<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed || !self.inner.has_next() {
            return None;
        }
        let entry = self.inner.next_entry();
        if entry.is_err() {
            // a failed cursor may not advance; yield the error once and stop
            if let Err(err) = self.release() {
                warn!(error = %err, "failed to close range iterator");
            }
        }
        Some(entry)
    }
}

impl<I: StateQueryIterator> Drop for RangeScan<I> {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!(error = %err, "failed to close range iterator");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_ledger_put_get() {
        let ledger = MemoryLedger::new();

        ledger.put_state("TRADE0", b"value0".to_vec()).await.unwrap();
        let value = ledger.get_state("TRADE0").await.unwrap();

        assert_eq!(value, Some(b"value0".to_vec()));
    }

    #[tokio::test]
    async fn test_memory_ledger_get_absent() {
        let ledger = MemoryLedger::new();

        assert_eq!(ledger.get_state("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_ledger_overwrite() {
        let ledger = MemoryLedger::new();

        ledger.put_state("key", b"one".to_vec()).await.unwrap();
        ledger.put_state("key", b"two".to_vec()).await.unwrap();

        assert_eq!(ledger.get_state("key").await.unwrap(), Some(b"two".to_vec()));
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_ledger_rejects_empty_key() {
        let ledger = MemoryLedger::new();

        let err = ledger.put_state("", b"v".to_vec()).await.unwrap_err();

        assert!(err.to_string().contains("empty"));
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn test_range_is_ordered_and_half_open() {
        let ledger = MemoryLedger::new();
        for key in ["TRADE3", "TRADE1", "TRADE10", "TRADE99999", "OTHER", "TRADE0"] {
            ledger.put_state(key, key.as_bytes().to_vec()).await.unwrap();
        }

        let scan = RangeScan::new(
            ledger
                .get_state_by_range("TRADE0", "TRADE99999")
                .await
                .unwrap(),
        );
        let keys: Vec<String> = scan.map(|kv| kv.unwrap().key).collect();

        assert_eq!(keys, vec!["TRADE0", "TRADE1", "TRADE10", "TRADE3"]);
    }

    #[tokio::test]
    async fn test_range_unbounded_ends() {
        let ledger = MemoryLedger::new();
        for key in ["a", "b", "c"] {
            ledger.put_state(key, vec![1]).await.unwrap();
        }

        let all: Vec<_> = RangeScan::new(ledger.get_state_by_range("", "").await.unwrap())
            .map(|kv| kv.unwrap().key)
            .collect();
        let tail: Vec<_> = RangeScan::new(ledger.get_state_by_range("b", "").await.unwrap())
            .map(|kv| kv.unwrap().key)
            .collect();

        assert_eq!(all, vec!["a", "b", "c"]);
        assert_eq!(tail, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_range_scan_closes_on_drop() {
        let ledger = MemoryLedger::new();
        ledger.put_state("TRADE0", vec![1]).await.unwrap();

        {
            let mut scan = RangeScan::new(ledger.get_state_by_range("", "").await.unwrap());
            assert_eq!(ledger.open_iterators(), 1);
            let _ = scan.next();
        }

        assert_eq!(ledger.open_iterators(), 0);
    }

    #[tokio::test]
    async fn test_range_scan_explicit_close() {
        let ledger = MemoryLedger::new();

        let scan = RangeScan::new(ledger.get_state_by_range("", "").await.unwrap());
        scan.close().unwrap();

        assert_eq!(ledger.open_iterators(), 0);
    }

    #[tokio::test]
    async fn test_closed_iterator_refuses_next() {
        let ledger = MemoryLedger::new();
        ledger.put_state("k", vec![1]).await.unwrap();

        let mut iter = ledger.get_state_by_range("", "").await.unwrap();
        iter.close().unwrap();

        assert!(iter.next_entry().is_err());
        // second close is a no-op
        iter.close().unwrap();
        assert_eq!(ledger.open_iterators(), 0);
    }

    /// Cursor that reports entries but fails every advance without moving.
    struct StuckIterator {
        closes: usize,
    }

    impl StateQueryIterator for StuckIterator {
        fn has_next(&self) -> bool {
            true
        }

        fn next_entry(&mut self) -> Result<KeyValue> {
            Err(crate::Error::Backend("cursor stuck".to_string()))
        }

        fn close(&mut self) -> Result<()> {
            self.closes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_range_scan_stops_after_error() {
        let mut scan = RangeScan::new(StuckIterator { closes: 0 });

        assert!(scan.next().unwrap().is_err());
        assert!(scan.next().is_none());
        assert_eq!(scan.inner.closes, 1);
    }

    #[test]
    fn test_range_scan_error_then_count_terminates() {
        let scan = RangeScan::new(StuckIterator { closes: 0 });
        assert_eq!(scan.filter_map(Result::ok).count(), 0);
    }

    #[tokio::test]
    async fn test_scan_is_a_snapshot() {
        let ledger = MemoryLedger::new();
        ledger.put_state("TRADE0", vec![0]).await.unwrap();

        let scan = RangeScan::new(ledger.get_state_by_range("", "").await.unwrap());
        ledger.put_state("TRADE1", vec![1]).await.unwrap();

        assert_eq!(scan.count(), 1);
    }

    #[tokio::test]
    async fn test_memory_ledger_clear() {
        let ledger = MemoryLedger::with_capacity(8);
        ledger.put_state("a", vec![1]).await.unwrap();
        ledger.put_state("b", vec![2]).await.unwrap();
        assert_eq!(ledger.len(), 2);

        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.get_state("a").await.unwrap(), None);
    }

    #[test]
    fn test_memory_ledger_default() {
        let ledger = MemoryLedger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.open_iterators(), 0);
    }
}
