//! HTTP surface: router construction and shared state.
//!
//! Routes:
//! - `GET  /health`       - liveness probe
//! - `GET  /quotes/{id}`  - fetch one quote
//! - `POST /quotes`       - create a quote

pub mod quotes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use mediator::{Mediator, RequestContext};
use tokio_util::sync::CancellationToken;

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    mediator: Arc<Mediator>,
    shutdown: CancellationToken,
}

impl AppState {
    pub fn new(mediator: Arc<Mediator>, shutdown: CancellationToken) -> Self {
        Self { mediator, shutdown }
    }

    pub fn mediator(&self) -> &Mediator {
        &self.mediator
    }

    /// Per-request context: a child of the process shutdown token, so
    /// in-flight handlers observe shutdown as cancellation.
    pub fn request_context(&self) -> RequestContext {
        RequestContext::new(self.shutdown.child_token())
    }
}

/// Build the complete router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/quotes", post(quotes::create_quote))
        .route("/quotes/{id}", get(quotes::get_quote))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
