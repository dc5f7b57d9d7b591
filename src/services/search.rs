// src/services/search.rs

use crate::{
    models::question::Question,
    store::{StoreResult, TriviaStore},
};

/// Case-insensitive substring search over question text.
/// A missing or blank term matches every question.
pub async fn search_questions(
    store: &dyn TriviaStore,
    term: Option<&str>,
) -> StoreResult<Vec<Question>> {
    // Blankness is judged on the trimmed term; the raw term is what gets matched.
    match term.filter(|t| !t.trim().is_empty()) {
        Some(term) => store.filter_questions_by_substring(term).await,
        None => store.list_all_questions().await,
    }
}
