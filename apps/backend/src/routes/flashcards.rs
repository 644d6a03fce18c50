//! Flashcard deck endpoint

use axum::extract::{Query, State};
use axum::Json;
use study_core::{flashcards, parse_with};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/flashcards?subject=
///
/// Cards in catalog order. Shuffling is left to the client.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<FlashcardQuery>,
) -> Result<Json<FlashcardListResponse>> {
    let subjects = match &query.subject {
        Some(id) => {
            let subject = state
                .catalog
                .subject(id)
                .ok_or_else(|| ApiError::NotFound(format!("subject {}", id)))?;
            std::slice::from_ref(subject)
        }
        None => state.catalog.subjects(),
    };

    let mut cards = Vec::new();
    for subject in subjects {
        for topic in &subject.topics {
            let parsed = parse_with(&topic.content, &state.parse_options);
            cards.extend(flashcards(&parsed.questions).into_iter().map(|card| {
                FlashcardResponse {
                    front: card.front,
                    back: card.back,
                    subject_id: subject.id.clone(),
                    subject: subject.name.clone(),
                }
            }));
        }
    }

    Ok(Json(FlashcardListResponse { cards }))
}
