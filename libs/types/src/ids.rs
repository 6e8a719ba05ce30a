//! Identifier types for quiz and learning-map entities
//!
//! Question ids are ordinal (1..N) and double as the keys of a quiz
//! submission, so they know how to parse themselves from the loosely
//! formatted keys a form or JSON body carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::str::FromStr;

use crate::errors::IdError;

/// Ordinal identifier of a quiz question
///
/// Displayed as `q<N>`. Parses from `q<N>`, `Q<N>` or a bare `<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(NonZeroU16);

impl QuestionId {
    /// Create a question id from its ordinal; `None` for zero
    pub fn new(ordinal: u16) -> Option<Self> {
        NonZeroU16::new(ordinal).map(Self)
    }

    /// Ordinal position of the question (1-based)
    pub fn ordinal(&self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('q')
            .or_else(|| trimmed.strip_prefix('Q'))
            .unwrap_or(trimmed);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidQuestionKey(s.to_string()));
        }

        digits
            .parse::<u16>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| IdError::InvalidQuestionKey(s.to_string()))
    }
}

/// Identifier of a learning-map topic page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(NonZeroU16);

impl TopicId {
    pub fn new(id: u16) -> Option<Self> {
        NonZeroU16::new(id).map(Self)
    }

    pub fn value(&self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_rejects_zero() {
        assert!(QuestionId::new(0).is_none());
        assert_eq!(QuestionId::new(3).unwrap().ordinal(), 3);
    }

    #[test]
    fn test_question_id_display() {
        assert_eq!(QuestionId::new(7).unwrap().to_string(), "q7");
    }

    #[test]
    fn test_question_id_parse_accepted_forms() {
        let expected = QuestionId::new(4).unwrap();
        assert_eq!("q4".parse::<QuestionId>().unwrap(), expected);
        assert_eq!("Q4".parse::<QuestionId>().unwrap(), expected);
        assert_eq!("4".parse::<QuestionId>().unwrap(), expected);
        assert_eq!(" q4 ".parse::<QuestionId>().unwrap(), expected);
    }

    #[test]
    fn test_question_id_parse_rejects_garbage() {
        for key in ["", "q", "q0", "0", "question1", "q-1", "+3", "csrf_token", "q99999"] {
            assert!(key.parse::<QuestionId>().is_err(), "{key:?} should not parse");
        }
    }

    #[test]
    fn test_question_id_ordering() {
        let a = QuestionId::new(2).unwrap();
        let b = QuestionId::new(10).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_topic_id_serde_transparent() {
        let id = TopicId::new(6).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "6");
        let back: TopicId = serde_json::from_str("6").unwrap();
        assert_eq!(back, id);
    }
}
