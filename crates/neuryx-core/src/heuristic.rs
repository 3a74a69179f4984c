//! Deterministic clinical-anchor scoring profiles.
//!
//! Each domain's formula is held as configuration data rather than code:
//! an ordered list of named factors, each an affine transform of one
//! biomarker clamped to [0,100], combined by a weighted sum and an
//! amplification multiplier.

use serde::{Deserialize, Serialize};

use neuryx_common::{Domain, FeatureVector, NeuryxError, Result, FEATURE_COUNT};

/// One named factor: `clamp(scale × (value − offset), 0, 100)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorSpec {
    pub name: String,
    pub offset: f64,
    pub scale: f64,
    pub weight: f64,
}

impl FactorSpec {
    pub fn score(&self, value: f64) -> f64 {
        (self.scale * (value - self.offset)).clamp(0.0, 100.0)
    }
}

fn factor(name: &str, offset: f64, scale: f64, weight: f64) -> FactorSpec {
    FactorSpec {
        name: name.to_string(),
        offset,
        scale,
        weight,
    }
}

/// The heuristic scoring profile for one domain.
/// Factor order matches the domain's feature order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    pub domain: Domain,
    pub factors: Vec<FactorSpec>,
    /// Multiplier applied to the weighted sum before the final cap.
    pub amplification: f64,
}

impl RiskProfile {
    /// Canonical Alzheimer profile: clinical normal-range anchors with a
    /// 1.3 sensitivity amplification.
    pub fn alzheimer() -> Self {
        Self {
            domain: Domain::Alzheimer,
            factors: vec![
                factor("hippocampus",   4.5, -35.0, 0.20),
                factor("cortical",      3.5, -45.0, 0.15),
                factor("ventricle",    15.0,   4.0, 0.10),
                factor("white_matter",  0.0,  15.0, 0.10),
                factor("glucose",       7.0, -30.0, 0.15),
                factor("amyloid",       0.0,  60.0, 0.15),
                factor("tau",           0.0,  50.0, 0.15),
            ],
            amplification: 1.3,
        }
    }

    /// Canonical Parkinson profile: striatal binding ratios plus clinical
    /// scores, no amplification.
    pub fn parkinson() -> Self {
        Self {
            domain: Domain::Parkinson,
            factors: vec![
                factor("caudate_r",  4.0, -25.0, 0.15),
                factor("caudate_l",  4.0, -25.0, 0.15),
                factor("putamen_r",  3.0, -33.0, 0.15),
                factor("putamen_l",  3.0, -33.0, 0.15),
                factor("updrs",      0.0,   2.5, 0.15),
                factor("smell",     40.0,  -2.5, 0.15),
                factor("cognitive",  0.0,  3.33, 0.10),
            ],
            amplification: 1.0,
        }
    }

    pub fn for_domain(domain: Domain) -> Self {
        match domain {
            Domain::Alzheimer => Self::alzheimer(),
            Domain::Parkinson => Self::parkinson(),
        }
    }

    /// A profile must cover every feature and its weights must sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        if self.factors.len() != FEATURE_COUNT {
            return Err(NeuryxError::Config(format!(
                "{} profile defines {} factors, expected {FEATURE_COUNT}",
                self.domain,
                self.factors.len()
            )));
        }
        let sum: f64 = self.factors.iter().map(|f| f.weight).sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(NeuryxError::Config(format!(
                "{} profile weights sum to {sum}, expected 1.0",
                self.domain
            )));
        }
        Ok(())
    }

    /// Pure heuristic score in [0,100]. Deterministic, always succeeds.
    pub fn score(&self, features: &FeatureVector) -> f64 {
        let weighted_sum: f64 = self
            .factors
            .iter()
            .zip(features)
            .map(|(factor, value)| factor.score(*value) * factor.weight)
            .sum();
        (weighted_sum * self.amplification).clamp(0.0, 100.0)
    }
}
