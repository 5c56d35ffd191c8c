//! Contract configuration
//!
//! The defaults reproduce the deployed contract: seed keys `TRADE0`..`TRADE4`
//! and a `queryAllTrades` scan over `[TRADE0, TRADE99999)`.

use crate::{Error, Result};

/// Default prefix for seed keys.
pub const DEFAULT_KEY_PREFIX: &str = "TRADE";
/// Default inclusive start of the `queryAllTrades` scan.
pub const DEFAULT_RANGE_START: &str = "TRADE0";
/// Default exclusive end of the `queryAllTrades` scan.
pub const DEFAULT_RANGE_END: &str = "TRADE99999";

/// Key namespace used by the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    key_prefix: String,
    range_start: String,
    range_end: String,
}

impl ContractConfig {
    /// Create a configuration builder starting from the defaults.
    #[must_use]
    pub fn builder() -> ContractConfigBuilder {
        ContractConfigBuilder::default()
    }

    /// Prefix for seed keys.
    #[must_use]
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// Inclusive start of the listing scan.
    #[must_use]
    pub fn range_start(&self) -> &str {
        &self.range_start
    }

    /// Exclusive end of the listing scan.
    #[must_use]
    pub fn range_end(&self) -> &str {
        &self.range_end
    }

    /// Ledger key for the `index`-th seed trade.
    #[must_use]
    pub fn seed_key(&self, index: usize) -> String {
        format!("{}{index}", self.key_prefix)
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            range_start: DEFAULT_RANGE_START.to_string(),
            range_end: DEFAULT_RANGE_END.to_string(),
        }
    }
}

/// Builder for [`ContractConfig`]
#[derive(Debug, Default)]
pub struct ContractConfigBuilder {
    config: ContractConfig,
}

impl ContractConfigBuilder {
    /// Set the seed key prefix
    #[must_use]
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.key_prefix = prefix.into();
        self
    }

    /// Set the listing scan bounds, `start` inclusive and `end` exclusive
    #[must_use]
    pub fn range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.config.range_start = start.into();
        self.config.range_end = end.into();
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the prefix is empty or the range is empty or inverted
    pub fn build(self) -> Result<ContractConfig> {
        let config = self.config;
        if config.key_prefix.is_empty() {
            return Err(Error::InvalidConfig("key prefix must not be empty".to_string()));
        }
        if config.range_start >= config.range_end {
            return Err(Error::InvalidConfig(format!(
                "range start {:?} must sort before range end {:?}",
                config.range_start, config.range_end
            )));
        }
        Ok(config)
    }
}
