// src/handlers/category.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde_json::json;

use super::{page_params, path_id};
use crate::{
    error::AppError,
    models::category::category_map,
    services::pagination::{PageParams, paginate},
    store::DynStore,
};

/// Lists every category as an `{id: type}` object.
pub async fn list_categories(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_all_categories().await?;

    if categories.is_empty() {
        return Err(AppError::not_found());
    }

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
        "total_categories": categories.len(),
    })))
}

/// Retrieves a single category by ID.
pub async fn get_category(
    State(store): State<DynStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id)?;

    let category = store
        .find_category(id)
        .await?
        .ok_or_else(AppError::not_found)?;

    Ok(Json(json!({
        "success": true,
        "category": category,
    })))
}

/// Lists one page of the questions belonging to a category.
///
/// An unknown category is a 400, matching the lookup-failure contract of
/// this endpoint.
pub async fn list_category_questions(
    State(store): State<DynStore>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id)?;
    let page = page_params(params).page();

    let category = store
        .find_category(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up category {}: {:?}", id, e);
            AppError::bad_request()
        })?
        .ok_or_else(AppError::bad_request)?;

    let selection = store.filter_questions_by_category(category.id).await.map_err(|e| {
        tracing::error!("Failed to fetch questions for category {}: {:?}", id, e);
        AppError::bad_request()
    })?;

    Ok(Json(json!({
        "success": true,
        "questions": paginate(&selection, page),
        // Counts the category's questions, not the whole table.
        "total_questions": selection.len(),
        "current_category": category.category_type,
    })))
}
