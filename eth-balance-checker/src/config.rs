use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::{env, time::Duration};

/// Default node endpoint
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Account queried when none is configured
pub const DEFAULT_ACCOUNT_ADDRESS: &str = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";

/// Default transport timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Balance checker configuration
///
/// This structure contains all the configuration parameters for one balance lookup.
/// It handles loading values from environment variables with appropriate defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Ethereum RPC endpoint URL for communicating with the blockchain
    pub ethereum_rpc_url: String,

    /// Account whose balance is queried
    pub account_address: String,

    /// Transport timeout in seconds; 0 disables it
    pub rpc_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This method reads configuration from environment variables,
    /// using default values when variables are not defined.
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - Configuration structure or error
    ///
    /// # Environment Variables
    ///
    /// * `ETHEREUM_RPC_URL` - Ethereum RPC URL (default: "http://localhost:8545")
    /// * `ACCOUNT_ADDRESS` - Account to query (default: "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe")
    /// * `RPC_TIMEOUT_SECS` - Transport timeout in seconds (default: 30, 0 = none)
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_timeout_secs = match lookup("RPC_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .wrap_err_with(|| format!("RPC_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            ethereum_rpc_url: lookup("ETHEREUM_RPC_URL")
                .unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            account_address: lookup("ACCOUNT_ADDRESS")
                .unwrap_or_else(|| DEFAULT_ACCOUNT_ADDRESS.to_string()),
            rpc_timeout_secs,
        })
    }

    /// The transport timeout, or `None` when disabled
    pub fn rpc_timeout(&self) -> Option<Duration> {
        (self.rpc_timeout_secs > 0).then(|| Duration::from_secs(self.rpc_timeout_secs))
    }
}
