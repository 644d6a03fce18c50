//! Content parsing endpoint

use axum::{extract::State, Json};
use study_core::parse_with;

use crate::models::*;
use crate::AppState;

/// POST /api/content/parse
pub async fn parse(
    State(state): State<AppState>,
    Json(payload): Json<ParseContentRequest>,
) -> Json<ParsedContent> {
    Json(parse_with(&payload.content, &state.parse_options))
}
