//! Sample "orders" service built on errorhub
//!
//! Calls the mock downstream for stock lookups and exercises every
//! boundary branch: classified errors (local and inbound), HTTP-layer
//! rejections, unclassified errors, and panics

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use errorhub_client::ClassifiedSend;
use errorhub_core::{ErrorKind, ServiceIdentity, Severity};
use errorhub_server::{BoundaryError, boundary_layer};
use serde::Deserialize;
use serde_json::json;

/// Header carrying the caller's trace id
pub const TRACE_HEADER: &str = "x-trace-id";

#[derive(Clone)]
pub struct AppState {
    identity: Arc<ServiceIdentity>,
    downstream: String,
    http: reqwest::Client,
}

impl AppState {
    pub fn new(identity: ServiceIdentity, downstream: String) -> Self {
        Self {
            identity: Arc::new(identity),
            downstream,
            http: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OrderRequest {
    sku: String,
    quantity: u32,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/stock/{sku}", routing::get(stock))
        .route("/orders", routing::post(create_order))
        .route("/unexpected", routing::get(unexpected))
        .route("/crash", routing::get(crash))
        .with_state(state)
        .layer(boundary_layer())
}

/// Proxy a stock lookup, classifying whatever the downstream answers
async fn stock(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    headers: HeaderMap,
) -> Result<Response, BoundaryError> {
    let trace = headers.get(TRACE_HEADER).and_then(|value| value.to_str().ok());

    let response = state
        .http
        .get(format!("{}/inventory/{sku}", state.downstream))
        .send_classified(&state.identity, trace)
        .await?;

    let body = response.text().await.map_err(BoundaryError::unclassified)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, BoundaryError> {
    let Json(order) = payload?;

    if order.quantity == 0 {
        return Err(state
            .identity
            .error(ErrorKind::UnprocessableEntity)
            .message("quantity must be at least 1")
            .severity(Severity::Low)
            .context_value("sku", order.sku)
            .into());
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({ "sku": order.sku, "quantity": order.quantity })),
    ))
}

async fn unexpected() -> Result<&'static str, BoundaryError> {
    Err(anyhow::anyhow!("ledger offline").into())
}

async fn crash() -> &'static str {
    panic!("order book corrupted")
}
