//! Risk-Profile Scoring Engine
//!
//! Turns a set of quiz answers into a total score, one of four ordered
//! risk bands, and that band's fixed asset allocation.
//!
//! Provides boundary parsing of raw submissions, response validation,
//! band classification, and the built-in quiz tables.

pub mod validator;
pub mod standard;
pub mod engine;

pub use engine::{score, RiskProfileConfig, RiskProfileEngine};
pub use validator::{CompletionPolicy, KeyPolicy};
