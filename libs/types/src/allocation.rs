//! Recommended asset allocation per risk band
//!
//! Allocations are fixed lookup tables, not derived. The only invariant
//! is that the percentages of a table sum to exactly 100.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::ConfigError;

/// Asset class an allocation assigns weight to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetClass {
    #[serde(rename = "Fixed/Bonds")]
    FixedIncome,
    #[serde(rename = "ETF")]
    Etf,
    #[serde(rename = "Stocks")]
    Stocks,
}

impl AssetClass {
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::FixedIncome => "Fixed/Bonds",
            AssetClass::Etf => "ETF",
            AssetClass::Stocks => "Stocks",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage breakdown across asset classes
///
/// Entries keep their declaration order for display; consumers should
/// treat the table as an unordered label → percent mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationTable {
    entries: Vec<(AssetClass, u8)>,
}

impl AllocationTable {
    pub fn new(entries: Vec<(AssetClass, u8)>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyAllocation);
        }

        for (idx, (asset, _)) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|(seen, _)| seen == asset) {
                return Err(ConfigError::DuplicateAssetClass { asset: *asset });
            }
        }

        let total: u32 = entries.iter().map(|(_, pct)| u32::from(*pct)).sum();
        if total != 100 {
            return Err(ConfigError::AllocationSum { total });
        }

        Ok(Self { entries })
    }

    /// Weight assigned to `asset`, if the table lists it
    pub fn percentage(&self, asset: AssetClass) -> Option<u8> {
        self.entries
            .iter()
            .find(|(a, _)| *a == asset)
            .map(|(_, pct)| *pct)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssetClass, u8)> + '_ {
        self.entries.iter().copied()
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, pct)| u32::from(*pct)).sum()
    }

    /// Label → percent view, independent of declaration order
    pub fn to_map(&self) -> BTreeMap<&'static str, u8> {
        self.entries
            .iter()
            .map(|(asset, pct)| (asset.label(), *pct))
            .collect()
    }
}

impl Serialize for AllocationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (asset, pct) in &self.entries {
            map.serialize_entry(asset.label(), pct)?;
        }
        map.end()
    }
}
