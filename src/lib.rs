//! # trade-ledger: Trade Record Chaincode
//!
//! A small smart contract for a permissioned ledger. It stores dated trade
//! quotes as JSON under string keys and answers five functions: seed sample
//! data, read one trade, list all trades, create a trade, and replace a
//! trade's values.
//!
//! Ordering, consensus, endorsement and persistence belong to the host peer.
//! The contract reaches world state only through the [`ledger::LedgerStub`]
//! handle passed into each call; [`ledger::MemoryLedger`] stands in for the
//! peer in tests and demos.
//!
//! ## Example Usage
//!
//! ```rust
//! use trade_ledger::contract::TradeContract;
//! use trade_ledger::ledger::MemoryLedger;
//!
//! # async fn example() {
//! let ledger = MemoryLedger::new();
//! let contract = TradeContract::new();
//!
//! contract
//!     .invoke(&ledger, "createTrade", &["TRADE7", "07.01.2017", "2.5", "", ""])
//!     .await;
//! contract.invoke(&ledger, "changeTradeValues", &["TRADE7", "2.6"]).await;
//!
//! let response = contract.invoke(&ledger, "queryTrade", &["TRADE7"]).await;
//! assert_eq!(
//!     response.payload_str(),
//!     r#"{"date":"07.01.2017","values":["2.6"]}"#
//! );
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod contract;
pub mod error;
pub mod ledger;
pub mod trade;

pub use config::ContractConfig;
pub use contract::{Function, Response, TradeContract};
pub use error::{Error, Result};
