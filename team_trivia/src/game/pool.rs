//! Per-category question sequences.
//!
//! Categories keep the order in which they first appeared in the source
//! data, and questions keep their source order within a category. Nothing
//! is ever removed or reordered; playing a question only flips its `used`
//! flag.

use serde::{Deserialize, Serialize};

use super::entities::{CategorySummary, Question};
use crate::data::QuestionRecord;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Category {
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.questions.iter().filter(|q| !q.used).count()
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct QuestionPool {
    categories: Vec<Category>,
}

impl QuestionPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Group pre-validated records by category, preserving source order.
    pub fn from_records(records: impl IntoIterator<Item = QuestionRecord>) -> Self {
        let mut pool = Self::new();
        for record in records {
            pool.push(record.into());
        }
        pool
    }

    fn push(&mut self, question: Question) {
        match self
            .categories
            .iter_mut()
            .find(|c| c.name == question.category)
        {
            Some(category) => category.questions.push(question),
            None => self.categories.push(Category {
                name: question.category.clone(),
                questions: vec![question],
            }),
        }
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// First unused question of a category in source order. Returns `None`
    /// both for unknown and for exhausted categories.
    #[must_use]
    pub fn next_question(&self, category: &str) -> Option<&Question> {
        self.category(category)?.questions.iter().find(|q| !q.used)
    }

    #[must_use]
    pub fn get(&self, category: &str, question_id: &str) -> Option<&Question> {
        self.category(category)?
            .questions
            .iter()
            .find(|q| q.id == question_id)
    }

    /// Flag a question as played. Returns whether a matching question was
    /// found.
    pub fn mark_used(&mut self, category: &str, question_id: &str) -> bool {
        let question = self
            .categories
            .iter_mut()
            .find(|c| c.name == category)
            .and_then(|c| c.questions.iter_mut().find(|q| q.id == question_id));
        match question {
            Some(question) => {
                question.used = true;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|c| {
                let remaining_count = c.remaining_count();
                CategorySummary {
                    name: c.name.clone(),
                    remaining_count,
                    disabled: remaining_count == 0,
                }
            })
            .collect()
    }

    /// True iff every question in every category has been played. An empty
    /// pool counts as exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.categories
            .iter()
            .all(|c| c.questions.iter().all(|q| q.used))
    }

    /// Total number of questions across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
