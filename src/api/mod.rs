//! # Query API
//!
//! HTTP surface over the question-answering pipeline.
//!
//! ## Endpoints
//!
//! - `POST /api/query` - Answer a question (`{"query": "..."}` or `{"question": "..."}`)
//! - `GET /health` - Liveness with version and uptime
//! - `GET /metrics` - Prometheus text format metrics
//!
//! ## Example
//!
//! ```no_run
//! use infraquery::api::{create_router, AppState};
//! use infraquery::config::InfraQueryConfig;
//! use infraquery::pipeline::{QueryContext, QueryPipeline};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = InfraQueryConfig::load(None)?.with_env_overrides();
//! let pipeline = Arc::new(QueryPipeline::new(QueryContext::from_config(&config)?));
//!
//! let state = Arc::new(AppState::new(pipeline, Arc::new(config)));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Request errors use a small JSON envelope:
//! ```json
//! {
//!   "error": {
//!     "message": "Invalid request. Please provide a query.",
//!     "type": "invalid_request_error",
//!     "code": "invalid_request_error"
//!   }
//! }
//! ```
//!
//! A question that cannot be answered is not an HTTP error: the pipeline
//! always returns text, and the `source` metadata tells the two apart.

mod health;
mod query;
pub mod types;

pub use types::*;

use crate::config::InfraQueryConfig;
use crate::metrics::MetricsCollector;
use crate::pipeline::QueryPipeline;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (1 MB).
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub pipeline: Arc<QueryPipeline>,
    pub config: Arc<InfraQueryConfig>,
    /// Metrics collector for observability
    pub metrics: Arc<MetricsCollector>,
}

impl AppState {
    pub fn new(pipeline: Arc<QueryPipeline>, config: Arc<InfraQueryConfig>) -> Self {
        // Safe to call repeatedly; later calls get a private recorder handle
        let prometheus_handle = crate::metrics::setup_metrics().unwrap_or_else(|e| {
            tracing::debug!("Metrics already initialized, creating new handle: {}", e);
            crate::metrics::PrometheusBuilder::new()
                .build_recorder()
                .handle()
        });

        Self {
            pipeline,
            config,
            metrics: Arc::new(MetricsCollector::new(Instant::now(), prometheus_handle)),
        }
    }
}

/// Create the API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .route("/api/query", post(query::handle))
        .route("/health", get(health::handle))
        .route("/metrics", get(crate::metrics::handler::metrics_handler))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
