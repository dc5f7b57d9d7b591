// src/services/quiz.rs

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    models::{question::Question, quiz::CategoryFilter},
    store::{StoreResult, TriviaStore},
};

/// Picks one unseen question, optionally restricted to a category.
///
/// Returns `Ok(None)` once every eligible question has been seen.
pub async fn select_quiz_question(
    store: &dyn TriviaStore,
    filter: CategoryFilter,
    seen: &HashSet<i64>,
) -> StoreResult<Option<Question>> {
    let seen: Vec<i64> = seen.iter().copied().collect();
    let candidates = store
        .filter_questions_excluding(&seen, filter.category_id())
        .await?;

    tracing::debug!(
        "Quiz candidates: {} (filter: {:?}, seen: {})",
        candidates.len(),
        filter,
        seen.len()
    );

    Ok(pick_candidate(candidates, &mut rand::thread_rng()))
}

/// Uniform choice over the candidate set.
pub fn pick_candidate<R: Rng + ?Sized>(candidates: Vec<Question>, rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}
