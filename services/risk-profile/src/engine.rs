//! Risk-profile engine: orchestrator
//!
//! Ties together validation and band classification. The engine holds
//! only immutable configuration, so one instance can be shared across
//! any number of concurrent callers.

use serde::{Deserialize, Serialize};
use types::band::BandTable;
use types::errors::{ConfigError, ScoringError};
use types::questionnaire::Questionnaire;
use types::response::ResponseSet;
use types::score::ScoreResult;

use crate::standard;
use crate::validator::{self, CompletionPolicy, KeyPolicy};

/// Scoring policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskProfileConfig {
    /// Whether every question must be answered
    pub completion: CompletionPolicy,
    /// Whether unrecognized keys are rejected
    pub keys: KeyPolicy,
}

/// Score a response set against injected tables.
///
/// Pure: the same inputs always yield the same result. The total is the
/// sum of the accepted answers; the band is the one whose interval
/// contains the total.
pub fn score(
    responses: &ResponseSet,
    questionnaire: &Questionnaire,
    bands: &BandTable,
    config: &RiskProfileConfig,
) -> Result<ScoreResult, ScoringError> {
    let accepted =
        validator::validate_responses(responses, questionnaire, config.completion, config.keys)?;

    // Accepted values lie within non-negative scales whose maxima sum to
    // at most u32::MAX (checked by `Questionnaire::new`), so this is exact
    let total = accepted
        .total()
        .and_then(|sum| u32::try_from(sum).ok())
        .unwrap_or(u32::MAX);
    let band = bands.classify(total);

    tracing::debug!(
        total,
        answered = accepted.len(),
        band = %band.label,
        "risk profile classified"
    );

    Ok(ScoreResult::new(total, band.clone(), accepted))
}

/// Risk-profile scoring service
#[derive(Debug, Clone)]
pub struct RiskProfileEngine {
    questionnaire: Questionnaire,
    bands: BandTable,
    config: RiskProfileConfig,
}

impl RiskProfileEngine {
    /// Create an engine from explicit tables
    pub fn new(questionnaire: Questionnaire, bands: BandTable, config: RiskProfileConfig) -> Self {
        Self {
            questionnaire,
            bands,
            config,
        }
    }

    /// Create an engine from the built-in questionnaire and bands
    pub fn standard(config: RiskProfileConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            standard::questionnaire()?,
            standard::bands()?,
            config,
        ))
    }

    /// Score an already-typed response set
    pub fn score(&self, responses: &ResponseSet) -> Result<ScoreResult, ScoringError> {
        score(responses, &self.questionnaire, &self.bands, &self.config)
    }

    /// Parse raw key/value pairs from a submission, then score them
    pub fn score_submission<I, K, V>(&self, pairs: I) -> Result<ScoreResult, ScoringError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let responses = validator::parse_submission(pairs, &self.questionnaire, self.config.keys)?;
        self.score(&responses)
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn bands(&self) -> &BandTable {
        &self.bands
    }

    pub fn config(&self) -> &RiskProfileConfig {
        &self.config
    }
}
