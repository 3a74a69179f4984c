//! neuryx-core — The prediction pipeline.
//!
//! Feature extraction, heuristic scoring profiles, the model/heuristic
//! blending policy, and threshold classification, assembled into one
//! immutable engine per disease domain.

pub mod classify;
pub mod engine;
pub mod features;
pub mod heuristic;

// Re-export commonly used types
pub use classify::TierThresholds;
pub use engine::{BlendPolicy, DomainEngine, EngineStatus};
pub use features::extract_features;
pub use heuristic::RiskProfile;
