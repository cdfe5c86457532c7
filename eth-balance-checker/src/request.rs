//! Request construction for a single balance query

use http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, Method};

use crate::{
    models::{BalanceQuery, JsonRpcRequest},
    transport::TransportRequest,
};

/// Turns a [`BalanceQuery`] into a JSON-RPC payload and its delivery instructions
///
/// Construction cannot fail: the address is forwarded as given and left for
/// the node to judge.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    query: &'a BalanceQuery,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(query: &'a BalanceQuery) -> Self {
        Self { query }
    }

    /// The `eth_getBalance` call for this query
    pub fn payload(&self) -> JsonRpcRequest {
        JsonRpcRequest::eth_get_balance(self.query.address())
    }

    /// POST the serialized payload to the query's endpoint as `application/json`
    pub fn build(&self) -> TransportRequest {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Only string and integer fields: serde_json cannot reject this shape
        let body = serde_json::to_string(&self.payload())
            .expect("JSON-RPC request always serializes");

        TransportRequest {
            url: self.query.endpoint_url().to_string(),
            method: Method::POST,
            headers,
            body,
        }
    }
}
