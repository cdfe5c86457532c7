use std::{fmt, str::FromStr};

use alloy_primitives::{Address, U256};
use num_bigint::BigUint;

use crate::error::QueryError;

/// Number of decimal places between wei and one unit of the native currency
pub const ETHER_DECIMALS: u32 = 18;

/// A single balance lookup: which node to ask, and about which account
///
/// Built once by the caller and never mutated. The address is carried as
/// text; the node is the authority on whether it is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceQuery {
    endpoint_url: String,
    address: String,
}

impl BalanceQuery {
    pub fn new(endpoint_url: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            address: address.into(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Whether the address looks like a `0x`-prefixed 20-byte hex identifier
    ///
    /// Purely advisory: queries are sent regardless of the answer.
    pub fn has_well_formed_address(&self) -> bool {
        self.address.starts_with("0x") && Address::from_str(&self.address).is_ok()
    }
}

/// An exact, non-negative amount of wei
///
/// Backed by an unbounded integer, so values wider than 256 bits survive
/// conversion intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Balance(BigUint);

impl Balance {
    /// Convert a base-16 numeral (no `0x` prefix) into a balance
    ///
    /// The empty string denotes zero. Any character outside `[0-9a-fA-F]`
    /// yields [`QueryError::Conversion`] carrying the offending numeral.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hexadecimal digits of any length
    ///
    /// # Returns
    ///
    /// * `Result<Balance, QueryError>` - The exact value or a conversion failure
    pub fn from_hex(hex: &str) -> Result<Self, QueryError> {
        if hex.is_empty() {
            return Ok(Self::default());
        }

        // BigUint's radix parser tolerates '+' and '_' separators, which are not hex digits
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(QueryError::Conversion { hex: hex.to_string() });
        }

        BigUint::parse_bytes(hex.as_bytes(), 16)
            .map(Self)
            .ok_or_else(|| QueryError::Conversion { hex: hex.to_string() })
    }

    /// Minimal lowercase hex form without prefix; zero renders as `"0"`
    pub fn to_hex(&self) -> String {
        self.0.to_str_radix(16)
    }

    /// The balance as a 256-bit word, or `None` when it does not fit
    pub fn to_u256(&self) -> Option<U256> {
        U256::try_from_be_slice(&self.0.to_bytes_be())
    }

    /// Exact decimal rendering in whole currency units (wei / 10^18)
    ///
    /// Trailing fractional zeros are dropped; no rounding takes place.
    pub fn to_ether_string(&self) -> String {
        let scale = BigUint::from(10u32).pow(ETHER_DECIMALS);
        let whole = &self.0 / &scale;
        let fraction = &self.0 % &scale;

        let fraction = format!("{:0>width$}", fraction.to_string(), width = ETHER_DECIMALS as usize);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{fraction}")
        }
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl From<BigUint> for Balance {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u128> for Balance {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
