//! Per-domain scoring engine: the blending policy and result assembly.
//!
//! One engine is built per domain at startup and shared read-only across
//! requests. The model path is optional; every failure on it degrades to
//! the heuristic score, so the engine's scoring surface is infallible once
//! the features are extracted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use neuryx_common::{Domain, FeatureVector, PredictionResult, Result, ScorePath};
use neuryx_model::{InferenceKind, ModelArtifact};

use crate::classify::TierThresholds;
use crate::features::extract_features;
use crate::heuristic::RiskProfile;

/// Confidence reported when the model contributed to the score.
const MODEL_CONFIDENCE: f64 = 0.95;
/// Confidence reported on either heuristic path.
const HEURISTIC_CONFIDENCE: f64 = 0.85;

/// How a domain combines model and heuristic scores once inference
/// succeeds. A zero heuristic weight means the model output stands alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendPolicy {
    /// Multiplier applied to the model percentage, capped at 100.
    pub model_amplification: f64,
    pub model_weight: f64,
    pub heuristic_weight: f64,
}

impl BlendPolicy {
    pub fn for_domain(domain: Domain) -> Self {
        match domain {
            // Model output stands alone, amplified for sensitivity.
            Domain::Alzheimer => Self {
                model_amplification: 1.5,
                model_weight: 1.0,
                heuristic_weight: 0.0,
            },
            // Mostly model, tempered by the clinical heuristic.
            Domain::Parkinson => Self {
                model_amplification: 1.0,
                model_weight: 0.7,
                heuristic_weight: 0.3,
            },
        }
    }

    fn is_blended(&self) -> bool {
        self.heuristic_weight > 0.0
    }
}

/// Snapshot of a domain's model state for the health surface.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<InferenceKind>,
}

/// Per-domain scoring engine. Immutable after startup.
#[derive(Debug)]
pub struct DomainEngine {
    domain: Domain,
    profile: RiskProfile,
    thresholds: TierThresholds,
    blend: BlendPolicy,
    model: Option<ModelArtifact>,
}

impl DomainEngine {
    /// Heuristic-only engine with the domain's canonical profile,
    /// thresholds, and blend policy.
    pub fn new(domain: Domain) -> Result<Self> {
        let profile = RiskProfile::for_domain(domain);
        profile.validate()?;
        Ok(Self {
            domain,
            profile,
            thresholds: TierThresholds::for_domain(domain),
            blend: BlendPolicy::for_domain(domain),
            model: None,
        })
    }

    /// Engine with an already-validated artifact attached.
    pub fn with_model(domain: Domain, artifact: ModelArtifact) -> Result<Self> {
        let mut engine = Self::new(domain)?;
        engine.model = Some(artifact);
        Ok(engine)
    }

    /// Engine for `domain`, attempting the artifact load when a path is
    /// configured. Load failures are logged and absorbed: the engine comes
    /// up heuristic-only rather than failing startup.
    pub fn from_artifact_path(domain: Domain, path: Option<&Path>) -> Result<Self> {
        let mut engine = Self::new(domain)?;
        if let Some(path) = path {
            match ModelArtifact::load(path, domain) {
                Ok(artifact) => {
                    info!(
                        %domain,
                        path = %path.display(),
                        kind = artifact.kind().as_str(),
                        "model artifact loaded"
                    );
                    engine.model = Some(artifact);
                }
                Err(e) => {
                    warn!(
                        %domain,
                        path = %path.display(),
                        error = %e,
                        "model artifact unavailable, scoring heuristic-only"
                    );
                }
            }
        }
        Ok(engine)
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            loaded: self.model.is_some(),
            kind: self.model.as_ref().map(|m| m.kind()),
        }
    }

    /// Score a raw JSON payload end to end. Only extraction can fail.
    pub fn predict(&self, payload: &Value) -> Result<PredictionResult> {
        let features = extract_features(self.domain, payload)?;
        Ok(self.predict_features(&features))
    }

    /// Score an extracted feature vector. Infallible: model unavailability
    /// and inference failures both fall back to the heuristic score.
    pub fn predict_features(&self, features: &FeatureVector) -> PredictionResult {
        let heuristic = self.profile.score(features);

        let (score, path, method) = match &self.model {
            None => (heuristic, ScorePath::FallbackOnly, None),
            Some(artifact) => match artifact.infer(features) {
                Ok(probability) => {
                    let kind = artifact.kind();
                    let model_pct =
                        (probability * 100.0 * self.blend.model_amplification).min(100.0);
                    let blended = self.blend.model_weight * model_pct
                        + self.blend.heuristic_weight * heuristic;
                    let path = match (self.blend.is_blended(), kind) {
                        (false, InferenceKind::Probability) => ScorePath::ModelProbability,
                        (false, InferenceKind::Value) => ScorePath::ModelValue,
                        (true, InferenceKind::Probability) => ScorePath::BlendedProbability,
                        (true, InferenceKind::Value) => ScorePath::BlendedValue,
                    };
                    (blended, path, Some(kind.as_str().to_string()))
                }
                Err(e) => {
                    warn!(
                        domain = %self.domain,
                        error = %e,
                        "inference failed, falling back to heuristic"
                    );
                    (heuristic, ScorePath::FallbackAfterError, None)
                }
            },
        };

        let score = score.clamp(0.0, 100.0);
        let level = self.thresholds.classify(score);
        let confidence = if path.model_contributed() {
            MODEL_CONFIDENCE
        } else {
            HEURISTIC_CONFIDENCE
        };
        debug!(
            domain = %self.domain,
            score,
            level = %level,
            path = ?path,
            "scored request"
        );

        PredictionResult {
            risk_percentage: score,
            risk_level: level,
            risk_color: level.color().to_string(),
            confidence,
            success: true,
            model_used: path,
            method,
        }
    }

    /// One inference against a mid-range vector, run at startup so a broken
    /// artifact surfaces at boot instead of on the first request. Failure
    /// demotes the engine to heuristic-only.
    pub fn smoke_check(&mut self) {
        let Some(artifact) = &self.model else {
            return;
        };
        match artifact.infer(&midrange_features(self.domain)) {
            Ok(p) => {
                info!(domain = %self.domain, probability = p, "startup inference check passed");
            }
            Err(e) => {
                warn!(
                    domain = %self.domain,
                    error = %e,
                    "startup inference check failed, demoting to heuristic-only"
                );
                self.model = None;
            }
        }
    }
}

/// Physiologically mid-range biomarkers, used only for the startup check.
fn midrange_features(domain: Domain) -> FeatureVector {
    match domain {
        Domain::Alzheimer => [3.5, 3.0, 18.0, 1.5, 6.0, 0.8, 1.0],
        Domain::Parkinson => [3.0, 3.0, 2.2, 2.2, 25.0, 25.0, 10.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuryx_common::RiskLevel;
    use neuryx_model::{Predictor, Scaler};
    use serde_json::json;

    const EPS: f64 = 1e-9;

    fn names(domain: Domain) -> Vec<String> {
        domain.feature_names().iter().map(|s| s.to_string()).collect()
    }

    /// Logistic artifact with zero weights: always predicts 0.5.
    fn flat_logistic(domain: Domain) -> ModelArtifact {
        ModelArtifact {
            name: format!("{domain}-flat"),
            feature_names: names(domain),
            predictor: Predictor::Logistic {
                coefficients: vec![0.0; 7],
                intercept: 0.0,
            },
            feature_scaler: None,
            target_scaler: None,
        }
    }

    /// Linear artifact producing non-finite output for huge inputs.
    fn overflowing_linear(domain: Domain) -> ModelArtifact {
        ModelArtifact {
            name: format!("{domain}-overflow"),
            feature_names: names(domain),
            predictor: Predictor::Linear {
                coefficients: vec![f64::MAX, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                intercept: 0.0,
            },
            feature_scaler: None,
            target_scaler: None,
        }
    }

    fn alzheimer_reference_payload() -> Value {
        json!({
            "hippocampus_volume": 3.0,
            "cortical_thickness": 2.5,
            "ventricle_volume": 20,
            "white_matter_hyperintensities": 2,
            "brain_glucose_metabolism": 5.5,
            "amyloid_deposition": 1.0,
            "tau_protein_level": 1.3
        })
    }

    #[test]
    fn test_fallback_only_matches_heuristic_exactly() {
        let engine = DomainEngine::new(Domain::Alzheimer).unwrap();
        let features = [3.0, 2.5, 20.0, 2.0, 5.5, 1.0, 1.3];
        let result = engine.predict_features(&features);

        assert_eq!(result.model_used, ScorePath::FallbackOnly);
        assert_eq!(
            result.risk_percentage,
            RiskProfile::alzheimer().score(&features)
        );
        assert!((result.confidence - 0.85).abs() < EPS);
        assert_eq!(result.method, None);
        assert!(result.success);
    }

    #[test]
    fn test_alzheimer_reference_scenario() {
        let engine = DomainEngine::new(Domain::Alzheimer).unwrap();
        let result = engine.predict(&alzheimer_reference_payload()).unwrap();

        assert!((result.risk_percentage - 62.075).abs() < EPS);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.risk_color, "#F44336");
        assert_eq!(result.model_used, ScorePath::FallbackOnly);
    }

    #[test]
    fn test_model_only_path_amplifies_and_tags() {
        let engine =
            DomainEngine::with_model(Domain::Alzheimer, flat_logistic(Domain::Alzheimer))
                .unwrap();
        let result = engine.predict_features(&[3.5, 3.0, 18.0, 1.5, 6.0, 0.8, 1.0]);

        // p = 0.5 -> 50% -> amplified by 1.5 -> 75, model stands alone.
        assert!((result.risk_percentage - 75.0).abs() < EPS);
        assert_eq!(result.model_used, ScorePath::ModelProbability);
        assert_eq!(result.method.as_deref(), Some("probability"));
        assert!((result.confidence - 0.95).abs() < EPS);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_model_amplification_caps_at_hundred() {
        let artifact = ModelArtifact {
            name: "alz-sure".to_string(),
            feature_names: names(Domain::Alzheimer),
            predictor: Predictor::Logistic {
                coefficients: vec![0.0; 7],
                intercept: 50.0, // sigmoid ~ 1.0
            },
            feature_scaler: None,
            target_scaler: None,
        };
        let engine = DomainEngine::with_model(Domain::Alzheimer, artifact).unwrap();
        let result = engine.predict_features(&[3.5, 3.0, 18.0, 1.5, 6.0, 0.8, 1.0]);
        assert!((result.risk_percentage - 100.0).abs() < EPS);
    }

    #[test]
    fn test_parkinson_blend_ratio() {
        let engine =
            DomainEngine::with_model(Domain::Parkinson, flat_logistic(Domain::Parkinson))
                .unwrap();
        let features = [2.1, 2.3, 1.2, 1.4, 35.0, 22.0, 12.0];
        let heuristic = RiskProfile::parkinson().score(&features);
        let result = engine.predict_features(&features);

        // p = 0.5 -> 50%, no amplification; 0.7 model + 0.3 heuristic.
        let want = 0.7 * 50.0 + 0.3 * heuristic;
        assert!((result.risk_percentage - want).abs() < EPS);
        assert_eq!(result.model_used, ScorePath::BlendedProbability);
        assert!((result.confidence - 0.95).abs() < EPS);
    }

    #[test]
    fn test_value_model_tags_method() {
        let artifact = ModelArtifact {
            name: "park-linear".to_string(),
            feature_names: names(Domain::Parkinson),
            predictor: Predictor::Linear {
                coefficients: vec![0.0; 7],
                intercept: 0.4,
            },
            feature_scaler: None,
            target_scaler: Some(Scaler::MinMax {
                min: vec![0.0],
                max: vec![1.0],
            }),
        };
        let engine = DomainEngine::with_model(Domain::Parkinson, artifact).unwrap();
        let features = [2.1, 2.3, 1.2, 1.4, 35.0, 22.0, 12.0];
        let result = engine.predict_features(&features);

        assert_eq!(result.model_used, ScorePath::BlendedValue);
        assert_eq!(result.method.as_deref(), Some("value"));
        let heuristic = RiskProfile::parkinson().score(&features);
        let want = 0.7 * 40.0 + 0.3 * heuristic;
        assert!((result.risk_percentage - want).abs() < EPS);
    }

    #[test]
    fn test_inference_failure_falls_back_with_tag() {
        let engine =
            DomainEngine::with_model(Domain::Parkinson, overflowing_linear(Domain::Parkinson))
                .unwrap();
        let features = [f64::MAX, 2.3, 1.2, 1.4, 35.0, 22.0, 12.0];
        let result = engine.predict_features(&features);

        assert_eq!(result.model_used, ScorePath::FallbackAfterError);
        assert_eq!(
            result.risk_percentage,
            RiskProfile::parkinson().score(&features)
        );
        assert!((result.confidence - 0.85).abs() < EPS);
        assert!(result.success);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let engine =
            DomainEngine::with_model(Domain::Parkinson, flat_logistic(Domain::Parkinson))
                .unwrap();
        let payload = json!({
            "datScan": { "caudateR": 2.1, "caudateL": 2.3, "putamenR": 1.2, "putamenL": 1.4 },
            "updrs": { "npdtot": 35 },
            "smellTest": { "upsitPercentage": 22 },
            "cognitive": { "cogchq": 12 }
        });
        let first = engine.predict(&payload).unwrap();
        let second = engine.predict(&payload).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_error_crosses_boundary() {
        let engine = DomainEngine::new(Domain::Parkinson).unwrap();
        let payload = json!({
            "datScan": { "caudateR": 2.1, "caudateL": 2.3, "putamenR": 1.2, "putamenL": 1.4 },
            "smellTest": { "upsitPercentage": 22 },
            "cognitive": { "cogchq": 12 }
        });
        let err = engine.predict(&payload).unwrap_err();
        assert!(err.to_string().contains("updrs.npdtot"));
    }

    #[test]
    fn test_missing_artifact_path_comes_up_heuristic_only() {
        let engine = DomainEngine::from_artifact_path(
            Domain::Alzheimer,
            Some(Path::new("/nonexistent/model.json")),
        )
        .unwrap();
        assert!(!engine.model_loaded());
        let status = engine.status();
        assert!(!status.loaded);
        assert!(status.kind.is_none());
    }

    #[test]
    fn test_smoke_check_demotes_on_failure() {
        // Overflowing weights make even the mid-range vector non-finite.
        let artifact = ModelArtifact {
            name: "park-broken".to_string(),
            feature_names: names(Domain::Parkinson),
            predictor: Predictor::Linear {
                coefficients: vec![f64::MAX; 7],
                intercept: 0.0,
            },
            feature_scaler: None,
            target_scaler: None,
        };
        let mut engine = DomainEngine::with_model(Domain::Parkinson, artifact).unwrap();
        assert!(engine.model_loaded());
        engine.smoke_check();
        assert!(!engine.model_loaded());
    }

    #[test]
    fn test_smoke_check_keeps_healthy_model() {
        let mut engine =
            DomainEngine::with_model(Domain::Alzheimer, flat_logistic(Domain::Alzheimer))
                .unwrap();
        engine.smoke_check();
        assert!(engine.model_loaded());
    }
}
