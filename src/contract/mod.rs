//! Trade contract: function routing and the host entry points
//!
//! The host calls [`TradeContract::init`] once when the contract is
//! instantiated and [`TradeContract::invoke`] for every transaction. Each
//! invocation is independent; all state lives in the ledger.
//!
//! | function            | arguments                              |
//! |---------------------|----------------------------------------|
//! | `initLedger`        | none                                   |
//! | `queryTrade`        | key                                    |
//! | `createTrade`       | key, date, value, reserved, reserved   |
//! | `queryAllTrades`    | none                                   |
//! | `changeTradeValues` | key, value                             |
//!
//! ```rust
//! use trade_ledger::contract::TradeContract;
//! use trade_ledger::ledger::MemoryLedger;
//!
//! # async fn example() {
//! let ledger = MemoryLedger::new();
//! let contract = TradeContract::new();
//!
//! contract.invoke(&ledger, "initLedger", &[] as &[&str]).await;
//! let response = contract.invoke(&ledger, "queryTrade", &["TRADE0"]).await;
//! assert!(response.is_ok());
//! # }
//! ```

mod operations;
mod response;

pub use response::{Response, ERROR, OK};

use crate::config::ContractConfig;
use crate::ledger::LedgerStub;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Functions the contract answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Write the five sample trades
    InitLedger,
    /// Return the raw bytes stored at one key
    QueryTrade,
    /// Write a new single-value trade
    CreateTrade,
    /// List every trade in the configured key range
    QueryAllTrades,
    /// Replace the values of an existing trade
    ChangeTradeValues,
}

impl Function {
    /// Every routable function.
    pub const ALL: [Self; 5] = [
        Self::InitLedger,
        Self::QueryTrade,
        Self::CreateTrade,
        Self::QueryAllTrades,
        Self::ChangeTradeValues,
    ];

    /// Name the host dispatches on.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InitLedger => "initLedger",
            Self::QueryTrade => "queryTrade",
            Self::CreateTrade => "createTrade",
            Self::QueryAllTrades => "queryAllTrades",
            Self::ChangeTradeValues => "changeTradeValues",
        }
    }

    /// Required argument count, `None` when arguments are ignored.
    #[must_use]
    pub const fn arity(&self) -> Option<usize> {
        match self {
            Self::InitLedger | Self::QueryAllTrades => None,
            Self::QueryTrade => Some(1),
            Self::CreateTrade => Some(5),
            Self::ChangeTradeValues => Some(2),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Function {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|function| function.as_str() == name)
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))
    }
}

/// The trade record-store contract.
///
/// Holds only its key-namespace configuration; the ledger handle is passed
/// into every call.
#[derive(Debug, Clone, Default)]
pub struct TradeContract {
    config: ContractConfig,
}

impl TradeContract {
    /// Contract with the default key namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contract with a custom key namespace.
    #[must_use]
    pub const fn with_config(config: ContractConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Instantiation hook. Writes nothing.
    #[must_use]
    pub fn init<S: LedgerStub>(&self, _stub: &S) -> Response {
        Response::success(Vec::new())
    }

    /// Run `function` with `args` and wrap the outcome for the host.
    ///
    /// Never panics on bad input: unknown names, wrong argument counts and
    /// backend failures all become [`ERROR`] responses.
    pub async fn invoke<S, A>(&self, stub: &S, function: &str, args: &[A]) -> Response
    where
        S: LedgerStub,
        A: AsRef<str>,
    {
        let result = self.call(stub, function, args).await;
        if let Err(err) = &result {
            warn!(function, error = %err, "invocation failed");
        }
        result.into()
    }

    /// Like [`invoke`](Self::invoke), taking the function name as the first
    /// element of `args`.
    ///
    /// An empty vector is routed as an empty (unknown) function name.
    pub async fn invoke_args<S, A>(&self, stub: &S, args: &[A]) -> Response
    where
        S: LedgerStub,
        A: AsRef<str>,
    {
        match args.split_first() {
            Some((function, params)) => self.invoke(stub, function.as_ref(), params).await,
            None => self.invoke(stub, "", args).await,
        }
    }

    /// Run `function` with `args`, returning the raw payload.
    ///
    /// # Errors
    ///
    /// Returns error for an unknown function, a wrong argument count, or a
    /// ledger failure.
    pub async fn call<S, A>(&self, stub: &S, function: &str, args: &[A]) -> Result<Vec<u8>>
    where
        S: LedgerStub,
        A: AsRef<str>,
    {
        let function: Function = function.parse()?;
        debug!(%function, args = args.len(), "dispatching");

        match function {
            Function::InitLedger => self.init_ledger(stub).await,
            Function::QueryTrade => self.query_trade(stub, args).await,
            Function::CreateTrade => self.create_trade(stub, args).await,
            Function::QueryAllTrades => self.query_all_trades(stub).await,
            Function::ChangeTradeValues => self.change_trade_values(stub, args).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_names_round_trip() {
        for function in Function::ALL {
            assert_eq!(function.as_str().parse::<Function>().unwrap(), function);
        }
    }

    #[test]
    fn test_function_match_is_exact() {
        assert!("QueryTrade".parse::<Function>().is_err());
        assert!("queryTrade ".parse::<Function>().is_err());
        assert!("".parse::<Function>().is_err());
    }

    #[test]
    fn test_unknown_function_message() {
        let err = "deleteTrade".parse::<Function>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid Smart Contract function name.");
        assert!(matches!(err, Error::UnknownFunction(name) if name == "deleteTrade"));
    }

    #[test]
    fn test_arity_table() {
        assert_eq!(Function::QueryTrade.arity(), Some(1));
        assert_eq!(Function::CreateTrade.arity(), Some(5));
        assert_eq!(Function::ChangeTradeValues.arity(), Some(2));
        assert_eq!(Function::InitLedger.arity(), None);
        assert_eq!(Function::QueryAllTrades.arity(), None);
    }

    #[test]
    fn test_function_display() {
        assert_eq!(Function::QueryAllTrades.to_string(), "queryAllTrades");
    }
}
