//! Filter configuration and the per-question drop predicate.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

use crate::bank::QuestionBank;
use crate::error::{QuizbankError, Result};
use crate::question::Question;

/// Which questions to remove from a bank.
///
/// Rules are checked in a fixed order and the first match wins:
/// `keep_categories`, then `drop_categories`, then `drop_id_prefixes`.
/// An empty set is treated as not given.
///
/// # Example
///
/// ```
/// use quizbank::{FilterConfig, Question};
///
/// let filter = FilterConfig::new().with_drop_id_prefixes(["KEI-"]);
///
/// let legacy = Question::new().with_field("id", "KEI-001");
/// let current = Question::new().with_field("id", "VOC-001");
/// assert!(filter.should_drop(&legacy));
/// assert!(!filter.should_drop(&current));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep only questions whose category is listed.
    pub keep_categories: IndexSet<String>,
    /// Remove questions whose category is listed.
    pub drop_categories: IndexSet<String>,
    /// Remove questions whose id starts with one of these.
    pub drop_id_prefixes: IndexSet<String>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keep_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_drop_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop_categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_drop_id_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop_id_prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// True when no rule is configured.
    pub fn is_empty(&self) -> bool {
        self.keep_categories.is_empty()
            && self.drop_categories.is_empty()
            && self.drop_id_prefixes.is_empty()
    }

    /// Require at least one rule.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(QuizbankError::NoFilter);
        }
        Ok(())
    }

    /// Return the rule that removes `question`, if any.
    pub fn evaluate(&self, question: &Question) -> Option<DropReason> {
        let category = question.category();

        if !self.keep_categories.is_empty() && !self.keep_categories.contains(category) {
            return Some(DropReason::NotKept {
                category: category.to_string(),
            });
        }

        if !self.drop_categories.is_empty() && self.drop_categories.contains(category) {
            return Some(DropReason::DroppedCategory {
                category: category.to_string(),
            });
        }

        let id = question.id();
        self.drop_id_prefixes
            .iter()
            .find(|prefix| id.starts_with(prefix.as_str()))
            .map(|prefix| DropReason::IdPrefix {
                id: id.to_string(),
                prefix: prefix.clone(),
            })
    }

    pub fn should_drop(&self, question: &Question) -> bool {
        self.evaluate(question).is_some()
    }

    /// Split a bank into survivors and removed questions, keeping order.
    pub fn apply(&self, bank: QuestionBank) -> FilterOutcome {
        let original_len = bank.len();
        let mut kept = Vec::with_capacity(original_len);
        let mut dropped = Vec::new();

        for (index, question) in bank.into_iter().enumerate() {
            match self.evaluate(&question) {
                Some(reason) => dropped.push(DroppedQuestion {
                    index,
                    id: question.id().to_string(),
                    reason,
                }),
                None => kept.push(question),
            }
        }

        FilterOutcome {
            kept: QuestionBank::new(kept),
            dropped,
            original_len,
        }
    }
}

/// Why a question was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DropReason {
    /// Category not in the keep list.
    NotKept { category: String },
    /// Category in the drop list.
    DroppedCategory { category: String },
    /// Id starts with a dropped prefix.
    IdPrefix { id: String, prefix: String },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::NotKept { category } => {
                write!(f, "category '{}' not in keep list", category)
            }
            DropReason::DroppedCategory { category } => {
                write!(f, "category '{}' is dropped", category)
            }
            DropReason::IdPrefix { prefix, .. } => write!(f, "id starts with '{}'", prefix),
        }
    }
}

/// A removed question and where it sat in the original bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedQuestion {
    /// Zero-based position in the original bank.
    pub index: usize,
    /// The question's id (empty when missing).
    pub id: String,
    pub reason: DropReason,
}

/// Result of running a filter over a bank.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Surviving questions in original order.
    pub kept: QuestionBank,
    /// Removed questions in original order.
    pub dropped: Vec<DroppedQuestion>,
    /// Size of the bank before filtering.
    pub original_len: usize,
}

impl FilterOutcome {
    pub fn removed(&self) -> usize {
        self.dropped.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.dropped.is_empty()
    }
}
