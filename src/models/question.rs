// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: i64,

    /// The text content of the question.
    pub question: String,

    pub answer: String,

    pub difficulty: i32,

    /// Foreign key into `categories.id`.
    pub category: i64,
}

/// DTO for creating a new question.
///
/// Every field is required; a missing field is rejected while the JSON
/// body is extracted, an empty text field by `validate()`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1, message = "Question text must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "Answer must not be empty"))]
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

/// Body of `POST /api/v1/questions/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}
