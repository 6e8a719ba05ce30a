//! Per-submission scoring output

use serde::Serialize;

use crate::band::RiskBand;
use crate::response::ResponseSet;

/// Result of scoring one quiz submission
///
/// Built fresh per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub total_score: u32,
    #[serde(flatten)]
    pub band: RiskBand,
    /// Accepted answers, echoed back for review
    pub responses: ResponseSet,
}

impl ScoreResult {
    pub fn new(total_score: u32, band: RiskBand, responses: ResponseSet) -> Self {
        Self {
            total_score,
            band,
            responses,
        }
    }

    pub fn label(&self) -> &str {
        &self.band.label
    }
}
