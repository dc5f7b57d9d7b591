// src/handlers/mod.rs

use axum::{
    Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};

use crate::{error::AppError, services::pagination::PageParams};

pub mod category;
pub mod question;
pub mod quiz;

/// Fallback for unmatched routes, rendered with the common error body.
pub async fn not_found() -> AppError {
    AppError::not_found()
}

/// Unwraps a JSON body, replacing axum's rejection with the endpoint's error.
fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    on_error: fn() -> AppError,
) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        on_error()
    })
}

/// Numeric path ids; anything else is treated as an unknown resource.
fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Rejected path: {}", rejection.body_text());
        AppError::not_found()
    })
}

/// A malformed query string degrades to the first page.
fn page_params(params: Result<Query<PageParams>, QueryRejection>) -> PageParams {
    params.map(|Query(p)| p).unwrap_or_default()
}
