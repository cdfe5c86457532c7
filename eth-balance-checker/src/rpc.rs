use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::{
    error::{QueryError, TransportError},
    models::{Balance, BalanceQuery, JsonRpcResponse},
    request::RequestBuilder,
    response::ResponseInterpreter,
    transport::{HttpTransport, Transport},
};

/// Ethereum balance client
///
/// Runs one query at a time as a strictly sequential pipeline: build the
/// request, send it, classify the reply, convert the numeral. The client
/// holds no state between queries, so independent clients (or one shared
/// client) can serve concurrent callers.
#[derive(Clone, Debug)]
pub struct BalanceClient<T> {
    transport: T,
}

impl BalanceClient<HttpTransport> {
    /// Create a client that talks HTTP, optionally bounded by `timeout`
    ///
    /// # Arguments
    ///
    /// * `timeout` - Per-query transport timeout, or `None` for no limit
    ///
    /// # Returns
    ///
    /// * `Result<Self, TransportError>` - New client instance or an error
    pub fn http(timeout: Option<Duration>) -> Result<Self, TransportError> {
        Ok(Self::new(HttpTransport::new(timeout)?))
    }
}

impl<T: Transport> BalanceClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Send the query and classify the reply without converting it
    ///
    /// # Returns
    ///
    /// * `Result<JsonRpcResponse, QueryError>` - The classified reply, or
    ///   [`QueryError::Transport`] if no body was received
    pub async fn fetch(&self, query: &BalanceQuery) -> Result<JsonRpcResponse, QueryError> {
        let request = RequestBuilder::new(query).build();
        debug!("Built request body: {}", request.body);

        let response = self.transport.send(&request).await?;
        if !response.status.is_success() {
            // Nodes often put a JSON-RPC error in non-2xx replies, so keep going
            warn!("Endpoint answered with HTTP {}", response.status);
        }
        debug!("Full JSON response: {}", String::from_utf8_lossy(&response.body));

        Ok(ResponseInterpreter::interpret(&response.body))
    }

    /// Fetch the latest native balance of the queried account, in wei
    ///
    /// # Arguments
    ///
    /// * `query` - Endpoint and account to look up
    ///
    /// # Returns
    ///
    /// * `Result<Balance, QueryError>` - The exact balance, or the one terminal
    ///   failure that ended the query
    #[instrument(skip(self, query), fields(address = %query.address()), err)]
    pub async fn get_balance(&self, query: &BalanceQuery) -> Result<Balance, QueryError> {
        let balance = self.fetch(query).await?.into_balance()?;
        info!("Balance: {} wei", balance);
        Ok(balance)
    }
}
