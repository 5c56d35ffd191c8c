//! Trade records and the sample data written by `initLedger`
//!
//! ## Usage
//!
//! ```rust
//! use trade_ledger::trade::{seed_trades, Trade};
//!
//! let trade = Trade::new("01.01.2017", ["3.148"]);
//! assert_eq!(trade.values(), ["3.148"]);
//!
//! assert_eq!(seed_trades().len(), 5);
//! ```

mod record;

pub use record::Trade;

/// The five sample trades written under `{prefix}0`..`{prefix}4`.
#[must_use]
pub fn seed_trades() -> Vec<Trade> {
    vec![
        Trade::new("01.01.2017", ["3.148", "3.222"]),
        Trade::new("02.01.2017", ["4.547", "3.333"]),
        Trade::new("03.01.2017", ["1.478", "3.444"]),
        Trade::new("04.01.2017", ["8.465", "3.555"]),
        Trade::new("05.01.2017", ["4.112", "3.666"]),
    ]
}
