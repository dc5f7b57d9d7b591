// src/models/quiz.rs

use serde::Deserialize;

/// Category selector sent by the quiz client.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    /// `0` selects every category.
    pub id: i64,
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

/// Body of `POST /api/v1/quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<i64>,
}

/// Restriction applied to the quiz candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Only(i64),
}

impl CategoryFilter {
    /// Sentinel id meaning "no category restriction".
    pub const ANY_CATEGORY_ID: i64 = 0;

    pub fn category_id(self) -> Option<i64> {
        match self {
            CategoryFilter::Any => None,
            CategoryFilter::Only(id) => Some(id),
        }
    }
}

impl From<&QuizCategory> for CategoryFilter {
    fn from(category: &QuizCategory) -> Self {
        if category.id == Self::ANY_CATEGORY_ID {
            CategoryFilter::Any
        } else {
            CategoryFilter::Only(category.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_means_any_category() {
        let click = QuizCategory {
            id: 0,
            category_type: Some("click".to_string()),
        };
        assert_eq!(CategoryFilter::from(&click), CategoryFilter::Any);
        assert_eq!(CategoryFilter::Any.category_id(), None);
    }

    #[test]
    fn nonzero_id_restricts_category() {
        let science = QuizCategory {
            id: 1,
            category_type: Some("Science".to_string()),
        };
        assert_eq!(CategoryFilter::from(&science), CategoryFilter::Only(1));
        assert_eq!(CategoryFilter::Only(1).category_id(), Some(1));
    }

    #[test]
    fn quiz_request_requires_previous_questions() {
        let missing = serde_json::json!({ "quiz_category": { "id": 1, "type": "Science" } });
        assert!(serde_json::from_value::<QuizRequest>(missing).is_err());
    }
}
