//! Catalog search endpoint

use axum::extract::{Query, State};
use axum::Json;

use crate::models::*;
use crate::AppState;

/// GET /api/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results = state
        .catalog
        .search(&query.q)
        .into_iter()
        .map(SearchResult::from)
        .collect();
    Json(SearchResponse { results })
}
