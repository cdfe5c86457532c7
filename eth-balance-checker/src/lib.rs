// Export modules for the binary and integration tests
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod rpc;
pub mod transport;

pub use error::{QueryError, TransportError};
pub use models::{Balance, BalanceQuery, JsonRpcRequest, JsonRpcResponse};
pub use rpc::BalanceClient;
