use serde::Serialize;

/// JSON-RPC protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Method used to read an account's native balance
pub const ETH_GET_BALANCE: &str = "eth_getBalance";

/// Block tag selecting the most recently confirmed state
pub const LATEST_BLOCK: &str = "latest";

/// Request identifier; a query only ever has one call in flight
pub const REQUEST_ID: u64 = 1;

/// Code reported when a node's `error` object has no numeric `code`
///
/// Zero is outside every range JSON-RPC 2.0 assigns, so it cannot be
/// mistaken for a real node-supplied code.
pub const UNKNOWN_ERROR_CODE: i64 = 0;

/// JSON-RPC 2.0 request structure
///
/// Field declaration order is the serialized key order:
/// `jsonrpc`, `method`, `params`, `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC protocol version (always "2.0")
    pub jsonrpc: &'static str,

    /// Method name to call
    pub method: &'static str,

    /// Positional parameters: `[address, block tag]`
    pub params: (String, &'static str),

    /// Request identifier
    pub id: u64,
}

impl JsonRpcRequest {
    /// Build an `eth_getBalance` call for `address` at the latest block
    ///
    /// # Arguments
    ///
    /// * `address` - Account address, passed through verbatim
    ///
    /// # Returns
    ///
    /// * A request with every other field fixed to its protocol constant
    pub fn eth_get_balance(address: &str) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: ETH_GET_BALANCE,
            params: (address.to_string(), LATEST_BLOCK),
            id: REQUEST_ID,
        }
    }
}

/// A node's reply, classified
///
/// Exactly one variant describes any given response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonRpcResponse {
    /// `result` was present as a string; holds its digits with any `0x` prefix removed
    Success { result_hex: String },

    /// The node answered with an `error` object
    RpcError { code: i64, message: String },

    /// The body was not JSON, or had no usable `result`
    Malformed { detail: String },
}
