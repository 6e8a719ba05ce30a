//! Submitted quiz answers
//!
//! A `ResponseSet` is input, not a validated value: entries may refer to
//! unknown questions or carry out-of-scale values. The scoring engine is
//! responsible for rejecting those.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::QuestionId;

/// Mapping of question id to the integer the user picked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<QuestionId, i64>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the previous value for the question
    pub fn insert(&mut self, question: QuestionId, value: i64) -> Option<i64> {
        self.answers.insert(question, value)
    }

    pub fn get(&self, question: QuestionId) -> Option<i64> {
        self.answers.get(&question).copied()
    }

    pub fn contains(&self, question: QuestionId) -> bool {
        self.answers.contains_key(&question)
    }

    /// Answers in question order
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, i64)> + '_ {
        self.answers.iter().map(|(id, value)| (*id, *value))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Sum of all recorded values, or `None` on overflow
    pub fn total(&self) -> Option<i64> {
        self.answers
            .values()
            .try_fold(0i64, |acc, value| acc.checked_add(*value))
    }

    /// Keep only the answers whose question satisfies `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(QuestionId) -> bool) {
        self.answers.retain(|id, _| keep(*id));
    }
}

impl FromIterator<(QuestionId, i64)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, i64)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u16) -> QuestionId {
        QuestionId::new(n).unwrap()
    }

    #[test]
    fn test_total_sums_values() {
        let set: ResponseSet = [(id(1), 3), (id(2), 5), (id(7), 1)].into_iter().collect();
        assert_eq!(set.total(), Some(9));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_total_overflow_is_none() {
        let set: ResponseSet = [(id(1), i64::MAX), (id(2), 1)].into_iter().collect();
        assert_eq!(set.total(), None);
    }

    #[test]
    fn test_insert_reports_previous() {
        let mut set = ResponseSet::new();
        assert_eq!(set.insert(id(1), 2), None);
        assert_eq!(set.insert(id(1), 4), Some(2));
        assert_eq!(set.get(id(1)), Some(4));
    }

    #[test]
    fn test_iter_in_question_order() {
        let set: ResponseSet = [(id(10), 1), (id(2), 2), (id(5), 3)].into_iter().collect();
        let order: Vec<u16> = set.iter().map(|(q, _)| q.ordinal()).collect();
        assert_eq!(order, vec![2, 5, 10]);
    }

    #[test]
    fn test_serializes_as_object() {
        let set: ResponseSet = [(id(1), 4)].into_iter().collect();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!({ "1": 4 }));
    }

    #[test]
    fn test_retain() {
        let mut set: ResponseSet = [(id(1), 1), (id(2), 2), (id(3), 3)].into_iter().collect();
        set.retain(|q| q.ordinal() != 2);
        assert!(!set.contains(id(2)));
        assert_eq!(set.total(), Some(4));
    }
}
