// src/store/mod.rs

//! Persistence abstraction for questions and categories.
//!
//! Handlers and services only see `DynStore`; the concrete backend is
//! picked once at startup.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("invalid record: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared handle injected into the router state.
pub type DynStore = Arc<dyn TriviaStore>;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All questions, ordered by id ascending.
    async fn list_all_questions(&self) -> StoreResult<Vec<Question>>;

    /// All categories, ordered by type ascending.
    async fn list_all_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>>;

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// Persists a question and returns it with its assigned id.
    /// Empty text fields or an unknown category yield `StoreError::Validation`.
    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question>;

    /// Removes a question. Yields `StoreError::NotFound` for an unknown id.
    async fn delete_question(&self, id: i64) -> StoreResult<()>;

    /// Questions whose text contains `term`, ignoring case.
    async fn filter_questions_by_substring(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn filter_questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// Questions not listed in `exclude`, optionally limited to one category.
    async fn filter_questions_excluding(
        &self,
        exclude: &[i64],
        category_id: Option<i64>,
    ) -> StoreResult<Vec<Question>>;
}
