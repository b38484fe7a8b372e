//! Integration tests for the catalog client, run against a loopback HTTP
//! server so no network access is required.

use std::convert::Infallible;
use std::time::Duration;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use storegrid_lib::error::ApiError;
use storegrid_lib::model::Product;
use storegrid_lib::CatalogClient;

fn sample_products(count: u64) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            id: i + 1,
            title: format!("Product {}", i + 1),
            price: 10.0 + i as f64,
            description: format!("Description {}", i + 1),
            category: "test".to_string(),
            image: format!("https://example.com/{}.jpg", i + 1),
        })
        .collect()
}

/// Serves every request with a fixed status and body; returns the base URL.
async fn serve_fixed(status: StatusCode, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let io = TokioIo::new(stream);
            let body = body.clone();
            let service = service_fn(move |_req: Request<Incoming>| {
                let body = body.clone();
                async move {
                    let response = Response::builder()
                        .status(status)
                        .header("content-type", "application/json")
                        .body(Full::new(Bytes::from(body)))
                        .unwrap();
                    Ok::<_, Infallible>(response)
                }
            });
            tokio::spawn(async move {
                let _ = http1::Builder::new().serve_connection(io, service).await;
            });
        }
    });

    format!("http://{addr}")
}

fn client_for(base_url: &str) -> CatalogClient {
    CatalogClient::builder()
        .url(base_url)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_products_success_preserves_order() {
    let products = sample_products(20);
    let body = serde_json::to_string(&products).unwrap();
    let base_url = serve_fixed(StatusCode::OK, body).await;

    let fetched = client_for(&base_url).products().await.unwrap();

    assert_eq!(fetched.len(), 20);
    assert_eq!(fetched[0].id, 1);
    assert_eq!(fetched[19].title, "Product 20");
    assert_eq!(fetched, products);
}

#[tokio::test]
async fn test_products_http_error() {
    let base_url = serve_fixed(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()).await;

    let err = client_for(&base_url).products().await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    match err {
        ApiError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_products_malformed_body() {
    let base_url = serve_fixed(StatusCode::OK, "not json at all".to_string()).await;

    let err = client_for(&base_url).products().await.unwrap_err();

    match err {
        ApiError::Parse { body, .. } => {
            assert_eq!(body.as_deref(), Some("not json at all"));
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_products_network_error() {
    // Nothing listens on this port; the connection is refused.
    let err = client_for("http://127.0.0.1:1").products().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_cancel_aborts_fetch() {
    // A listener that accepts but never responds, so the request hangs
    // until the token fires.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            held.push(stream);
        }
    });

    let client = client_for(&format!("http://{addr}"));
    let cancel = CancellationToken::new();

    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = client.products_with_cancel(cancel).await.unwrap_err();
    assert!(matches!(err, ApiError::Cancelled));
}

#[test]
fn test_builder_rejects_invalid_url() {
    let err = CatalogClient::builder().url("not a url").build().unwrap_err();
    assert!(matches!(err, ApiError::InvalidUrl(_)));
}

#[test]
fn test_builder_keeps_base_url() {
    let client = client_for("http://127.0.0.1:9999/");
    assert_eq!(client.base_url(), "http://127.0.0.1:9999/");
}
