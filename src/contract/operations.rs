//! The five trade operations

use super::TradeContract;
use crate::ledger::{LedgerStub, RangeScan};
use crate::trade::{seed_trades, Trade};
use crate::{Error, Result};
use tracing::{debug, info};

fn expect_args<A>(args: &[A], expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(Error::arity(expected, args.len()))
    }
}

impl TradeContract {
    /// Write the sample trades under `{prefix}0`..`{prefix}4`, overwriting.
    ///
    /// # Errors
    ///
    /// Returns error on the first failed write; earlier writes stay.
    pub async fn init_ledger<S: LedgerStub>(&self, stub: &S) -> Result<Vec<u8>> {
        for (index, trade) in seed_trades().into_iter().enumerate() {
            let key = self.config().seed_key(index);
            stub.put_state(&key, trade.to_bytes()?).await?;
            info!(%key, date = trade.date(), values = ?trade.values(), "added trade");
        }
        Ok(Vec::new())
    }

    /// Return the bytes stored at `args[0]` as-is.
    ///
    /// An absent key yields an empty payload.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly one argument is given, or if the read fails.
    pub async fn query_trade<S, A>(&self, stub: &S, args: &[A]) -> Result<Vec<u8>>
    where
        S: LedgerStub,
        A: AsRef<str>,
    {
        expect_args(args, 1)?;
        Ok(stub.get_state(args[0].as_ref()).await?.unwrap_or_default())
    }

    /// Write `{date: args[1], values: [args[2]]}` at `args[0]`.
    ///
    /// Five arguments are required; the last two are reserved and ignored.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly five arguments are given, or if the write
    /// fails.
    pub async fn create_trade<S, A>(&self, stub: &S, args: &[A]) -> Result<Vec<u8>>
    where
        S: LedgerStub,
        A: AsRef<str>,
    {
        expect_args(args, 5)?;
        let trade = Trade::new(args[1].as_ref(), [args[2].as_ref()]);
        stub.put_state(args[0].as_ref(), trade.to_bytes()?).await?;
        Ok(Vec::new())
    }

    /// List every entry in the configured range as a JSON array.
    ///
    /// Each element is `{"Key":"<key>", "Record":<stored bytes>}`. Stored bytes
    /// are copied verbatim, never re-encoded. The cursor is closed on every
    /// exit path.
    ///
    /// # Errors
    ///
    /// Returns error if the scan cannot be opened or an entry cannot be read.
    pub async fn query_all_trades<S: LedgerStub>(&self, stub: &S) -> Result<Vec<u8>> {
        let config = self.config();
        let scan = RangeScan::new(
            stub.get_state_by_range(config.range_start(), config.range_end())
                .await?,
        );

        let mut buffer = vec![b'['];
        for (index, entry) in scan.enumerate() {
            let entry = entry?;
            if index > 0 {
                buffer.push(b',');
            }
            buffer.extend_from_slice(b"{\"Key\":");
            serde_json::to_writer(&mut buffer, &entry.key)?;
            buffer.extend_from_slice(b", \"Record\":");
            buffer.extend_from_slice(&entry.value);
            buffer.push(b'}');
        }
        buffer.push(b']');

        debug!(payload = %String::from_utf8_lossy(&buffer), "queryAllTrades");
        Ok(buffer)
    }

    /// Replace the values of the trade at `args[0]` with `[args[1]]`.
    ///
    /// The date is kept. Absent or unreadable stored data is treated as an
    /// empty trade rather than an error. There is no isolation between
    /// concurrent updates of the same key beyond what the ledger provides.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly two arguments are given, or if the read or
    /// write fails.
    pub async fn change_trade_values<S, A>(&self, stub: &S, args: &[A]) -> Result<Vec<u8>>
    where
        S: LedgerStub,
        A: AsRef<str>,
    {
        expect_args(args, 2)?;
        let key = args[0].as_ref();

        let stored = stub.get_state(key).await?;
        let mut trade = Trade::from_stored(stored.as_deref());
        if stored.is_some() && trade == Trade::default() {
            debug!(key, "stored trade empty or unreadable");
        }
        trade.replace_values(args[1].as_ref());

        stub.put_state(key, trade.to_bytes()?).await?;
        Ok(Vec::new())
    }
}
