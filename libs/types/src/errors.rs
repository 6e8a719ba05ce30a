//! Error types for quiz scoring and static configuration
//!
//! Error taxonomy using thiserror. Scoring errors are local validation
//! failures; configuration errors only occur while building the static
//! tables at startup.

use thiserror::Error;

use crate::allocation::AssetClass;
use crate::band::RiskLevel;
use crate::ids::{QuestionId, TopicId};

/// Submission key that is not a question identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid question key: {0:?}")]
    InvalidQuestionKey(String),
}

/// Failure to turn a response set into a score
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Invalid response value {value:?} for {question}: expected {expected}")]
    InvalidResponseValue {
        question: String,
        value: String,
        expected: String,
    },

    #[error("No question has been answered")]
    EmptyResponseSet,

    #[error("Unknown question: {key:?}")]
    UnknownQuestionId { key: String },

    #[error("Unanswered questions: {}", format_ids(.missing))]
    IncompleteResponseSet { missing: Vec<QuestionId> },

    #[error("Question {question} answered more than once")]
    DuplicateResponse { question: QuestionId },
}

impl ScoringError {
    /// Whether the user can fix this by re-answering the quiz.
    ///
    /// Every variant is a local validation failure; there is no
    /// transient class to retry.
    pub fn is_user_correctable(&self) -> bool {
        match self {
            ScoringError::InvalidResponseValue { .. }
            | ScoringError::EmptyResponseSet
            | ScoringError::UnknownQuestionId { .. }
            | ScoringError::IncompleteResponseSet { .. }
            | ScoringError::DuplicateResponse { .. } => true,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ScoringError::InvalidResponseValue { .. } => "INVALID_RESPONSE_VALUE",
            ScoringError::EmptyResponseSet => "EMPTY_RESPONSE_SET",
            ScoringError::UnknownQuestionId { .. } => "UNKNOWN_QUESTION_ID",
            ScoringError::IncompleteResponseSet { .. } => "INCOMPLETE_RESPONSE_SET",
            ScoringError::DuplicateResponse { .. } => "DUPLICATE_RESPONSE",
        }
    }
}

fn format_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Invalid static configuration (questionnaire, bands, topics)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Questionnaire has no questions")]
    EmptyQuestionnaire,

    #[error("Question ids must run 1..N in order: expected q{expected}, found {found}")]
    NonContiguousQuestionIds { expected: u16, found: QuestionId },

    #[error("Invalid scale for {question}: {min}..={max}")]
    InvalidScale {
        question: QuestionId,
        min: i64,
        max: i64,
    },

    #[error("Highest reachable total {max_total} exceeds {}", u32::MAX)]
    TotalOutOfRange { max_total: i128 },

    #[error("Allocation table is empty")]
    EmptyAllocation,

    #[error("Asset class {asset} listed more than once")]
    DuplicateAssetClass { asset: AssetClass },

    #[error("Allocation percentages sum to {total}, expected 100")]
    AllocationSum { total: u32 },

    #[error("Expected {expected} risk bands, found {found}")]
    BandCount { expected: usize, found: usize },

    #[error("Risk band {found:?} out of order: expected {expected:?}")]
    BandOrder { expected: RiskLevel, found: RiskLevel },

    #[error("Band {level:?} upper bound {max_score} does not exceed the previous bound")]
    BandThreshold { level: RiskLevel, max_score: u32 },

    #[error("Band {level:?} must be bounded; only the last band is open-ended")]
    UnboundedBand { level: RiskLevel },

    #[error("Last band {level:?} must be open-ended")]
    BoundedLastBand { level: RiskLevel },

    #[error("Topic {id} listed more than once")]
    DuplicateTopic { id: TopicId },
}
