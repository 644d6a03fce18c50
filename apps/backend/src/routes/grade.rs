//! Answer grading endpoint

use axum::Json;

use crate::error::Result;
use crate::models::*;

/// POST /api/grade
pub async fn grade(Json(payload): Json<GradeRequest>) -> Result<Json<Grade>> {
    let grade = study_core::grade(&payload.question, &payload.answer, payload.matching_mode)?;
    Ok(Json(grade))
}
