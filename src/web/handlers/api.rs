// POST /api/similarity: JSON variant of the form.
//
// Body: { "doc1": "...", "doc2": "..." }
// Returns the full Comparison record, or 422 with { "error": ... } when a
// document is empty after cleaning.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::similarity::compare;
use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub doc1: String,
    pub doc2: String,
}

pub async fn compare_documents(
    State(state): State<AppState>,
    Json(body): Json<CompareRequest>,
) -> Response {
    match compare(&body.doc1, &body.doc2, &state.config.options) {
        Ok(comparison) => Json(comparison).into_response(),
        Err(e) => api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    }
}
