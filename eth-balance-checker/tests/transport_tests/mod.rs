//! Integration tests for the HTTP transport
//!
//! Each test runs against a throwaway listener on 127.0.0.1.

use std::time::Duration;

use http::StatusCode;

use eth_balance_checker::{
    request::RequestBuilder,
    transport::{HttpTransport, Transport},
    BalanceClient, BalanceQuery, QueryError, TransportError,
};

use helpers::{closed_port_url, spawn_node, spawn_silent_node};

const ADDRESS: &str = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";

#[tokio::test]
async fn posts_json_rpc_envelope() {
    let (url, server) = spawn_node(
        "200 OK",
        r#"{"jsonrpc":"2.0","id":1,"result":"0xde0b6b3a7640000"}"#,
    )
    .await;

    let query = BalanceQuery::new(&url, ADDRESS);
    let transport = HttpTransport::new(Some(Duration::from_secs(5))).unwrap();
    let response = transport.send(&RequestBuilder::new(&query).build()).await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        br#"{"jsonrpc":"2.0","id":1,"result":"0xde0b6b3a7640000"}"#.to_vec()
    );

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST / HTTP/1.1\r\n"), "{raw}");
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"), "{raw}");
    assert!(raw.ends_with(
        r#"{"jsonrpc":"2.0","method":"eth_getBalance","params":["0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe","latest"],"id":1}"#
    ), "{raw}");
}

#[tokio::test]
async fn full_query_over_http() {
    let (url, server) = spawn_node(
        "200 OK",
        r#"{"jsonrpc":"2.0","id":1,"result":"0x1bc16d674ec80000"}"#,
    )
    .await;

    let client = BalanceClient::http(Some(Duration::from_secs(5))).unwrap();
    let balance = client.get_balance(&BalanceQuery::new(&url, ADDRESS)).await.unwrap();
    assert_eq!(balance.to_string(), "2000000000000000000");

    server.await.unwrap();
}

#[tokio::test]
async fn error_status_body_is_still_read() {
    let (url, server) = spawn_node(
        "400 Bad Request",
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid argument"}}"#,
    )
    .await;

    let client = BalanceClient::http(Some(Duration::from_secs(5))).unwrap();
    let result = client.get_balance(&BalanceQuery::new(&url, "0x1234")).await;
    assert!(matches!(result, Err(QueryError::Rpc { code: -32602, .. })));

    server.await.unwrap();
}

#[tokio::test]
async fn refused_connection() {
    let url = closed_port_url().await;

    let client = BalanceClient::http(Some(Duration::from_secs(5))).unwrap();
    let result = client.get_balance(&BalanceQuery::new(&url, ADDRESS)).await;
    match result {
        Err(err @ QueryError::Transport(TransportError::Connect(_))) => assert_eq!(err.exit_code(), 2),
        other => panic!("expected connect failure, got {other:?}"),
    }
}

#[tokio::test]
async fn timeout_is_a_transport_failure() {
    let url = spawn_silent_node(Duration::from_secs(5)).await;

    let client = BalanceClient::http(Some(Duration::from_millis(200))).unwrap();
    let result = client.get_balance(&BalanceQuery::new(&url, ADDRESS)).await;
    assert!(
        matches!(result, Err(QueryError::Transport(TransportError::Timeout(_)))),
        "{result:?}"
    );
}
