//! Risk tiers and the per-request result record.

use serde::{Deserialize, Serialize};

/// Discrete risk tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Display color shown alongside the tier.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#4CAF50",
            RiskLevel::Moderate => "#FF9800",
            RiskLevel::High => "#F44336",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which pipeline path produced the final score.
///
/// Recorded for observability; behavior never branches on it after the
/// blending step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePath {
    /// Model output used alone.
    ModelProbability,
    ModelValue,
    /// Weighted mix of model and heuristic outputs.
    BlendedProbability,
    BlendedValue,
    /// No artifact was loaded for the domain.
    FallbackOnly,
    /// An artifact was loaded but inference failed for this request.
    FallbackAfterError,
}

impl ScorePath {
    /// True when the statistical model contributed to the score.
    pub fn model_contributed(&self) -> bool {
        !matches!(self, ScorePath::FallbackOnly | ScorePath::FallbackAfterError)
    }
}

/// Result record returned for every scoring request. Created per request,
/// serialized immediately, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "riskPercentage")]
    pub risk_percentage: f64,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    #[serde(rename = "riskColor")]
    pub risk_color: String,
    pub confidence: f64,
    pub success: bool,
    pub model_used: ScorePath,
    /// Inference method ("probability" or "value") when a model contributed.
    pub method: Option<String>,
}
