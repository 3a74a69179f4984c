//! neuryx-model — Trained-artifact loading and inference.
//!
//! Wraps an externally trained predictor (plus optional input/output
//! scalers) behind a uniform "probability-like value in [0,1]" contract.
//! Artifacts are loaded once at startup and read-only afterwards.

pub mod artifact;
pub mod predictor;
pub mod scaler;

// Re-export commonly used types
pub use artifact::ModelArtifact;
pub use predictor::{InferenceKind, Predictor};
pub use scaler::Scaler;
