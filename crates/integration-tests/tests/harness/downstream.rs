//! Mock downstream service for integration tests
//!
//! Serves canned `/inventory/{sku}` responses so the service under test
//! has something to call

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// Downstream that answers each SKU with a fixed status and body
pub struct MockDownstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    request_count: AtomicU32,
    responses: HashMap<String, (u16, String)>,
}

impl MockDownstream {
    /// Start the mock with `(sku, status, body)` entries
    ///
    /// Unknown SKUs get a plain 404
    pub async fn start(entries: &[(&str, u16, &str)]) -> anyhow::Result<Self> {
        let responses = entries
            .iter()
            .map(|(sku, status, body)| ((*sku).to_owned(), (*status, (*body).to_owned())))
            .collect();

        let state = Arc::new(MockState {
            request_count: AtomicU32::new(0),
            responses,
        });

        let app = Router::new()
            .route("/inventory/{sku}", routing::get(handle_inventory))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL to configure the service under test with
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockDownstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_inventory(State(state): State<Arc<MockState>>, Path(sku): Path<String>) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    match state.responses.get(&sku) {
        Some((status, body)) => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, body.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, "unknown sku").into_response(),
    }
}
