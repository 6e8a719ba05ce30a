use risk_profile::{RiskProfileConfig, RiskProfileEngine, standard};
use std::sync::Arc;
use types::errors::ConfigError;
use types::topic::TopicCatalog;

/// Read-only tables shared by every request
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RiskProfileEngine>,
    pub topics: Arc<TopicCatalog>,
}

impl AppState {
    pub fn new(engine: RiskProfileEngine, topics: TopicCatalog) -> Self {
        Self {
            engine: Arc::new(engine),
            topics: Arc::new(topics),
        }
    }

    /// State backed by the built-in questionnaire, bands and topics
    pub fn standard(quiz: RiskProfileConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            RiskProfileEngine::standard(quiz)?,
            standard::topics()?,
        ))
    }
}
