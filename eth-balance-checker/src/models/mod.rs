//! Data models used throughout the application
//!
//! This module contains the JSON-RPC wire structures and the balance
//! value types the query pipeline produces.

// JSON-RPC protocol data structures
pub mod jsonrpc;

// Queries and exact wei amounts
pub mod balance;

pub use balance::{Balance, BalanceQuery};
pub use jsonrpc::{JsonRpcRequest, JsonRpcResponse};
