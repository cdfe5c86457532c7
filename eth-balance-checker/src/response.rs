//! Classification of raw response bodies and conversion to [`Balance`]

use serde_json::Value;
use tracing::debug;

use crate::{
    error::QueryError,
    models::{
        jsonrpc::{JsonRpcResponse, UNKNOWN_ERROR_CODE},
        Balance,
    },
};

/// Detail attached to [`JsonRpcResponse::Malformed`] when `result` is unusable
pub const MISSING_RESULT: &str = "missing or non-string result";

/// Detail attached when the body is valid JSON but not an object
pub const NOT_AN_OBJECT: &str = "response is not a JSON object";

/// Classifies response bodies into [`JsonRpcResponse`] variants
pub struct ResponseInterpreter;

impl ResponseInterpreter {
    /// Classify a raw response body
    ///
    /// Checks run in order and the first one that fails decides the outcome:
    /// JSON parse, `error` member, `result` member, prefix strip.
    ///
    /// # Arguments
    ///
    /// * `body` - The HTTP response body, exactly as received
    ///
    /// # Returns
    ///
    /// * The single [`JsonRpcResponse`] variant describing `body`
    pub fn interpret(body: &[u8]) -> JsonRpcResponse {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                debug!("Response body is not JSON: {}", e);
                return JsonRpcResponse::Malformed { detail: e.to_string() };
            }
        };

        let Some(object) = value.as_object() else {
            return JsonRpcResponse::Malformed { detail: NOT_AN_OBJECT.to_string() };
        };

        if let Some(error) = object.get("error") {
            return JsonRpcResponse::RpcError {
                code: error
                    .get("code")
                    .and_then(Value::as_i64)
                    .unwrap_or(UNKNOWN_ERROR_CODE),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            };
        }

        match object.get("result").and_then(Value::as_str) {
            Some(result) => JsonRpcResponse::Success {
                result_hex: strip_hex_prefix(result).to_string(),
            },
            None => JsonRpcResponse::Malformed { detail: MISSING_RESULT.to_string() },
        }
    }
}

/// Remove one leading `0x` or `0X`, if present
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

impl JsonRpcResponse {
    /// Resolve the classified reply to a balance or a terminal error
    ///
    /// Only [`JsonRpcResponse::Success`] can produce a [`Balance`]; its digits
    /// may still fail conversion.
    pub fn into_balance(self) -> Result<Balance, QueryError> {
        match self {
            JsonRpcResponse::Success { result_hex } => Balance::from_hex(&result_hex),
            JsonRpcResponse::RpcError { code, message } => Err(QueryError::Rpc { code, message }),
            JsonRpcResponse::Malformed { detail } => Err(QueryError::Malformed { detail }),
        }
    }
}
