// src/handlers/question.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use super::{json_body, page_params, path_id};
use crate::{
    error::AppError,
    models::{
        category::category_map,
        question::{NewQuestion, SearchRequest},
    },
    services::{
        pagination::{PageParams, paginate},
        search::search_questions,
    },
    store::{DynStore, StoreError},
};

/// Lists one page of questions together with the category map.
/// An empty page is reported as 404.
pub async fn list_questions(
    State(store): State<DynStore>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let page = page_params(params).page();

    let selection = store.list_all_questions().await?;
    let current_questions = paginate(&selection, page);

    if current_questions.is_empty() {
        return Err(AppError::not_found());
    }

    let categories = store.list_all_categories().await?;

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": selection.len(),
        "categories": category_map(&categories),
        "current_category": null,
    })))
}

/// Creates a new question.
/// Missing or empty fields and unknown categories are rejected with 422.
pub async fn create_question(
    State(store): State<DynStore>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload, AppError::unprocessable)?;
    payload.validate()?;

    let question = store.insert_question(payload).await.map_err(|e| match e {
        StoreError::Validation(msg) => AppError::Unprocessable(msg),
        other => {
            tracing::error!("Failed to create question: {:?}", other);
            AppError::unprocessable()
        }
    })?;

    tracing::info!("Created question {}", question.id);

    Ok(Json(json!({
        "success": true,
        "created": question.id,
    })))
}

/// Deletes a question by ID and returns the requested page of what remains.
pub async fn delete_question(
    State(store): State<DynStore>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id)?;
    let page = page_params(params).page();

    store.delete_question(id).await.map_err(|e| match e {
        StoreError::NotFound => AppError::not_found(),
        other => {
            tracing::error!("Failed to delete question {}: {:?}", id, other);
            AppError::unprocessable()
        }
    })?;

    tracing::info!("Deleted question {}", id);

    let selection = store.list_all_questions().await.map_err(|e| {
        tracing::error!("Failed to reload questions after delete: {:?}", e);
        AppError::unprocessable()
    })?;

    Ok(Json(json!({
        "success": true,
        "deleted": id,
        "questions": paginate(&selection, page),
        "total_questions": selection.len(),
    })))
}

/// Case-insensitive search on question text.
/// A missing or blank `searchTerm` returns every question.
pub async fn search(
    State(store): State<DynStore>,
    params: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let page = page_params(params).page();
    let payload = json_body(payload, AppError::not_found)?;

    let selection = search_questions(store.as_ref(), payload.search_term.as_deref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::not_found()
        })?;

    Ok(Json(json!({
        "success": true,
        "questions": paginate(&selection, page),
        "total_questions": selection.len(),
        "current_category": null,
    })))
}
