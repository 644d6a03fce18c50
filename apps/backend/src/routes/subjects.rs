//! Subject and topic endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use study_core::parse_with;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/subjects
pub async fn list(State(state): State<AppState>) -> Json<SubjectListResponse> {
    let subjects = state
        .catalog
        .subjects()
        .iter()
        .map(SubjectSummary::from)
        .collect();
    Json(SubjectListResponse { subjects })
}

/// GET /api/subjects/:subject_id
pub async fn get(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
) -> Result<Json<SubjectResponse>> {
    let subject = state
        .catalog
        .subject(&subject_id)
        .ok_or_else(|| ApiError::NotFound(format!("subject {}", subject_id)))?;
    Ok(Json(SubjectResponse::from(subject)))
}

/// GET /api/subjects/:subject_id/topics/:topic_id
pub async fn topic(
    State(state): State<AppState>,
    Path((subject_id, topic_id)): Path<(String, String)>,
) -> Result<Json<TopicResponse>> {
    let topic = state
        .catalog
        .topic(&subject_id, &topic_id)
        .ok_or_else(|| ApiError::NotFound(format!("topic {}/{}", subject_id, topic_id)))?;

    Ok(Json(TopicResponse {
        id: topic.id.clone(),
        subject_id: topic.subject_id.clone(),
        title: topic.title.clone(),
        slug: topic.slug.clone(),
        content: parse_with(&topic.content, &state.parse_options),
    }))
}
