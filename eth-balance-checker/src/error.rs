use thiserror::Error;

/// Failures raised by a [`Transport`](crate::transport::Transport) before any
/// response body could be observed.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The exchange did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The endpoint could not be reached (connection refused, DNS failure, TLS handshake)
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport-level failure, including reading the response body
    #[error("transport failure: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Terminal outcomes of a balance query other than a converted balance
///
/// Each variant corresponds to exactly one exit path of the query pipeline.
/// None of them is ever downgraded to a zero balance.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The network call could not complete
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The body was not JSON, or carried no usable `result`
    #[error("malformed response: {detail}")]
    Malformed { detail: String },

    /// The node explicitly rejected the call
    #[error("node returned error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// `result` was not a base-16 numeral
    #[error("unparsable balance numeral: {hex:?}")]
    Conversion { hex: String },
}

impl QueryError {
    /// Process exit code used by the console binary for this outcome
    ///
    /// Every variant maps to a distinct non-zero code so scripts can tell the
    /// failure classes apart without parsing stderr.
    pub fn exit_code(&self) -> i32 {
        match *self {
            QueryError::Transport(_) => 2,
            QueryError::Malformed { .. } => 3,
            QueryError::Rpc { .. } => 4,
            QueryError::Conversion { .. } => 5,
        }
    }
}
