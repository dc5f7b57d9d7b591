// src/handlers/quiz.rs

use std::collections::HashSet;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;

use super::json_body;
use crate::{
    error::AppError,
    models::quiz::{CategoryFilter, QuizRequest},
    services::quiz::select_quiz_question,
    store::DynStore,
};

/// Returns a random question the player has not seen yet.
///
/// `quiz_category.id == 0` plays across all categories. When nothing is
/// left to ask, `question` is `null`.
pub async fn next_question(
    State(store): State<DynStore>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = json_body(payload, AppError::unprocessable)?;

    let filter = CategoryFilter::from(&req.quiz_category);
    let seen: HashSet<i64> = req.previous_questions.into_iter().collect();

    let question = select_quiz_question(store.as_ref(), filter, &seen)
        .await
        .map_err(|e| {
            tracing::error!("Failed to select quiz question: {:?}", e);
            AppError::unprocessable()
        })?;

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
