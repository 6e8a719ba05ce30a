//! Types library for the risk-profile quiz
//!
//! Shared type definitions used by the scoring engine and the gateway.
//! Static configuration types validate their invariants on construction,
//! so a built `Questionnaire`, `AllocationTable` or `BandTable` is always
//! well-formed.
//!
//! # Modules
//! - `ids`: Identifiers (QuestionId, TopicId)
//! - `questionnaire`: Questions and answer scales
//! - `response`: Submitted answers
//! - `allocation`: Asset classes and allocation tables
//! - `band`: Risk levels, bands and the band table
//! - `score`: Scoring output
//! - `topic`: Learning-map topic catalog
//! - `errors`: Error taxonomy

pub mod ids;
pub mod questionnaire;
pub mod response;
pub mod allocation;
pub mod band;
pub mod score;
pub mod topic;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::questionnaire::*;
    pub use crate::response::*;
    pub use crate::allocation::*;
    pub use crate::band::*;
    pub use crate::score::*;
    pub use crate::topic::*;
    pub use crate::errors::*;
}
