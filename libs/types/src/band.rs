//! Risk bands and the score → band partition
//!
//! Four ordered bands partition the total-score range with half-open
//! intervals `(previous_max, max_score]`. The last band is open-ended, so
//! every total resolves to exactly one band and boundary values fall into
//! the lower band.

use serde::{Deserialize, Serialize};

use crate::allocation::AllocationTable;
use crate::errors::ConfigError;

/// Ordered risk-tolerance category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Conservative,
    Balanced,
    Aggressive,
    Adventurous,
}

impl RiskLevel {
    /// All levels, lowest tolerance first
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Conservative,
        RiskLevel::Balanced,
        RiskLevel::Aggressive,
        RiskLevel::Adventurous,
    ];
}

/// A risk band with its recommended allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBand {
    pub level: RiskLevel,
    pub label: String,
    pub description: String,
    pub rationale: String,
    /// Inclusive upper bound of the band; `None` for the open-ended top band
    pub max_score: Option<u32>,
    pub allocation: AllocationTable,
}

impl RiskBand {
    pub fn new(
        level: RiskLevel,
        label: impl Into<String>,
        description: impl Into<String>,
        rationale: impl Into<String>,
        max_score: Option<u32>,
        allocation: AllocationTable,
    ) -> Self {
        Self {
            level,
            label: label.into(),
            description: description.into(),
            rationale: rationale.into(),
            max_score,
            allocation,
        }
    }

    pub fn contains(&self, total: u32) -> bool {
        match self.max_score {
            Some(max) => total <= max,
            None => true,
        }
    }
}

/// Validated, ordered set of exactly four risk bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BandTable {
    bands: Vec<RiskBand>,
}

impl BandTable {
    pub const BAND_COUNT: usize = RiskLevel::ALL.len();

    pub fn new(bands: Vec<RiskBand>) -> Result<Self, ConfigError> {
        if bands.len() != Self::BAND_COUNT {
            return Err(ConfigError::BandCount {
                expected: Self::BAND_COUNT,
                found: bands.len(),
            });
        }

        let mut previous: Option<u32> = None;
        for (idx, (band, expected)) in bands.iter().zip(RiskLevel::ALL).enumerate() {
            if band.level != expected {
                return Err(ConfigError::BandOrder {
                    expected,
                    found: band.level,
                });
            }

            let is_last = idx == Self::BAND_COUNT - 1;
            match (band.max_score, is_last) {
                (None, false) => return Err(ConfigError::UnboundedBand { level: band.level }),
                (Some(_), true) => return Err(ConfigError::BoundedLastBand { level: band.level }),
                (Some(max), false) => {
                    if previous.is_some_and(|prev| max <= prev) {
                        return Err(ConfigError::BandThreshold {
                            level: band.level,
                            max_score: max,
                        });
                    }
                    previous = Some(max);
                }
                (None, true) => {}
            }
        }

        Ok(Self { bands })
    }

    /// Band whose interval contains `total`
    pub fn classify(&self, total: u32) -> &RiskBand {
        self.bands
            .iter()
            .find(|band| band.contains(total))
            .unwrap_or_else(|| &self.bands[Self::BAND_COUNT - 1])
    }

    pub fn get(&self, level: RiskLevel) -> &RiskBand {
        &self.bands[level as usize]
    }

    pub fn bands(&self) -> &[RiskBand] {
        &self.bands
    }

    pub fn iter(&self) -> impl Iterator<Item = &RiskBand> {
        self.bands.iter()
    }
}
