// src/store/memory.rs

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use validator::Validate;

use super::{StoreError, StoreResult, TriviaStore};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// Categories every fresh trivia database starts with.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    /// Keyed by id, so iteration is already id-ascending.
    questions: BTreeMap<i64, Question>,
    next_question_id: i64,
}

impl Tables {
    fn questions_where(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.questions.values().filter(|q| keep(q)).cloned().collect()
    }
}

/// In-process store used when no database is configured, and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the default categories with ids 1..=6.
    pub fn seeded() -> Self {
        Self::with_categories(
            DEFAULT_CATEGORIES
                .iter()
                .zip(1..)
                .map(|(name, id)| Category {
                    id,
                    category_type: name.to_string(),
                }),
        )
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: BTreeMap::new(),
            next_question_id: 1,
        };
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_all_questions(&self) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn list_all_categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        let mut categories: Vec<Category> = tables.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.category_type.cmp(&b.category_type));
        Ok(categories)
    }

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        new.validate()
            .map_err(|e| StoreError::Validation(e.to_string()))?;

        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&new.category) {
            return Err(StoreError::Validation(format!(
                "Category {} does not exist",
                new.category
            )));
        }

        // Ids are never reused, even after deletes.
        let id = tables.next_question_id.max(1);
        tables.next_question_id = id + 1;

        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            difficulty: new.difficulty,
            category: new.category,
        };
        tables.questions.insert(id, question.clone());

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn filter_questions_by_substring(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables.questions_where(|q| q.question.to_lowercase().contains(&needle)))
    }

    async fn filter_questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions_where(|q| q.category == category_id))
    }

    async fn filter_questions_excluding(
        &self,
        exclude: &[i64],
        category_id: Option<i64>,
    ) -> StoreResult<Vec<Question>> {
        let exclude: HashSet<i64> = exclude.iter().copied().collect();
        let tables = self.tables.read().await;
        Ok(tables.questions_where(|q| {
            !exclude.contains(&q.id) && category_id.is_none_or(|c| q.category == c)
        }))
    }
}
