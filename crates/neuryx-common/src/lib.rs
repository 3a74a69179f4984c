//! neuryx-common — Shared types and errors used across all Neuryx crates.

pub mod error;
pub mod domain;
pub mod risk;

// Re-export commonly used types
pub use domain::{Domain, FeatureVector, FEATURE_COUNT};
pub use error::{NeuryxError, Result};
pub use risk::{PredictionResult, RiskLevel, ScorePath};
