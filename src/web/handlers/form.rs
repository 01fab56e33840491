// GET / and POST /: the HTML comparison form.
//
// POST reads the urlencoded `doc1` and `doc2` fields, scores them and
// re-renders the form with the inputs filled back in. Documents that are
// empty after cleaning re-render with the error and a 422.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{info, warn};

use crate::similarity::similarity_with;
use crate::web::page::{render, PageState};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct CompareForm {
    pub doc1: String,
    pub doc2: String,
}

/// GET /: empty form.
pub async fn show_form() -> Html<String> {
    Html(render(&PageState::default()))
}

/// POST /: score the submitted documents.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<CompareForm>,
) -> Response {
    let mut page = PageState {
        doc1: Some(form.doc1.as_str()),
        doc2: Some(form.doc2.as_str()),
        ..Default::default()
    };

    match similarity_with(&form.doc1, &form.doc2, &state.config.options) {
        Ok(score) => {
            info!(score, "Form comparison");
            page.score = Some(score);
            Html(render(&page)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Form comparison rejected");
            page.error = Some(e.to_string());
            (StatusCode::UNPROCESSABLE_ENTITY, Html(render(&page))).into_response()
        }
    }
}
