//! End-to-end tests over a real TCP listener.

use server::{bind, serve, ServerConfig};
use std::net::SocketAddr;
use tokio::sync::oneshot;

async fn spawn_server() -> (SocketAddr, oneshot::Sender<()>) {
    let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown = async {
            let _ = rx.await;
        };
        serve(listener, ServerConfig::default(), shutdown)
            .await
            .unwrap();
    });

    (addr, tx)
}

#[tokio::test]
async fn test_post_form_over_tcp() {
    let (addr, shutdown) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/process"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("text=hello+++world%0A")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "hello world");

    let _ = shutdown.send(());
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let (addr, shutdown) = spawn_server().await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..16 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let response = client
                .post(format!("http://{addr}/process?text=req%20%20{i}"))
                .send()
                .await
                .unwrap();
            (i, response.text().await.unwrap())
        }));
    }

    for handle in handles {
        let (i, body) = handle.await.unwrap();
        assert_eq!(body, format!("req {i}"));
    }

    let _ = shutdown.send(());
}

#[tokio::test]
async fn test_get_over_tcp_is_rejected() {
    let (addr, shutdown) = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/process?text=hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text().await.unwrap(), "Method not allowed");

    let _ = shutdown.send(());
}

#[tokio::test]
async fn test_bind_failure_is_an_error() {
    let taken = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = taken.local_addr().unwrap();

    let err = bind(addr).await.unwrap_err();
    assert!(err.to_string().contains("failed to bind"));
}
