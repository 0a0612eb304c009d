//! Query endpoint handler.

use crate::api::{ApiError, AppState, QueryMetadata, QueryRequest, QueryResponse};
use crate::logging::{generate_request_id, question_preview};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, Instrument};

/// POST /api/query - Answer a natural-language infrastructure question.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    // Malformed bodies get the same envelope as a missing question
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let question = request
        .text()
        .ok_or_else(|| ApiError::bad_request("Invalid request. Please provide a query."))?;

    let request_id = generate_request_id();
    let span = tracing::info_span!("query", request_id = %request_id);

    async move {
        let start = Instant::now();
        let preview = question_preview(question, state.config.logging.enable_content_logging);
        info!(
            question_len = question.len(),
            question = preview.as_deref().unwrap_or("[redacted]"),
            "Query received"
        );

        let answer = state.pipeline.answer(question).await;
        let query_time = start.elapsed().as_millis() as u64;

        info!(
            source = %answer.source,
            query_time_ms = query_time,
            "Query answered"
        );

        Ok(Json(QueryResponse {
            response: answer.text,
            metadata: QueryMetadata {
                query_time,
                source: answer.source,
                timestamp: chrono::Utc::now().to_rfc3339(),
                request_id,
            },
        }))
    }
    .instrument(span)
    .await
}
