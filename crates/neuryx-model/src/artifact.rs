//! Artifact schema, loading, and the inference entry point.
//!
//! A missing or malformed artifact degrades the owning domain to
//! heuristic-only scoring; it never takes the process down.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use neuryx_common::{Domain, FeatureVector, NeuryxError, Result, FEATURE_COUNT};

use crate::predictor::{InferenceKind, Predictor};
use crate::scaler::Scaler;

/// Out-of-range raw outputs are squeezed by this divisor before clamping.
/// A safety net for uncalibrated regressors, not a calibrated transform.
const RESCUE_DIVISOR: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    /// Expected input order; must match the domain's canonical order.
    pub feature_names: Vec<String>,
    pub predictor: Predictor,
    #[serde(default)]
    pub feature_scaler: Option<Scaler>,
    #[serde(default)]
    pub target_scaler: Option<Scaler>,
}

impl ModelArtifact {
    /// Load and validate an artifact for `domain` from a JSON file.
    pub fn load(path: &Path, domain: Domain) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| NeuryxError::ModelUnavailable(format!("{}: {e}", path.display())))?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)
            .map_err(|e| NeuryxError::ModelUnavailable(format!("{}: {e}", path.display())))?;
        artifact.validate(domain)?;
        debug!(
            artifact = %artifact.name,
            kind = artifact.kind().as_str(),
            "loaded model artifact"
        );
        Ok(artifact)
    }

    /// Structural checks, run once at load time.
    pub fn validate(&self, domain: Domain) -> Result<()> {
        if self.predictor.coefficient_count() != FEATURE_COUNT {
            return Err(NeuryxError::ModelUnavailable(format!(
                "artifact {} carries {} coefficients, expected {FEATURE_COUNT}",
                self.name,
                self.predictor.coefficient_count()
            )));
        }
        if self.feature_names != domain.feature_names() {
            return Err(NeuryxError::ModelUnavailable(format!(
                "artifact {} feature order does not match the {domain} domain",
                self.name
            )));
        }
        if let Some(scaler) = &self.feature_scaler {
            if !scaler.is_consistent() || scaler.len() != FEATURE_COUNT {
                return Err(NeuryxError::ModelUnavailable(format!(
                    "artifact {} feature scaler does not cover {FEATURE_COUNT} columns",
                    self.name
                )));
            }
        }
        if let Some(scaler) = &self.target_scaler {
            if !scaler.is_consistent() || scaler.is_empty() {
                return Err(NeuryxError::ModelUnavailable(format!(
                    "artifact {} target scaler is malformed",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// Inference method, fixed at load time.
    pub fn kind(&self) -> InferenceKind {
        self.predictor.kind()
    }

    /// Run inference, returning a probability-like value in [0,1].
    ///
    /// Feature scaling is applied first when present. Value-style outputs
    /// pass through the target scaler's inverse transform, then anything
    /// outside [0,1] is rescued by division and clamping.
    pub fn infer(&self, features: &FeatureVector) -> Result<f64> {
        let scaled = match &self.feature_scaler {
            Some(scaler) => scaler.transform(features),
            None => *features,
        };
        let raw = self.predictor.predict(&scaled);

        let value = match self.kind() {
            InferenceKind::Probability => raw,
            InferenceKind::Value => match &self.target_scaler {
                Some(scaler) => scaler.inverse_transform_one(raw),
                None => raw,
            },
        };
        if !value.is_finite() {
            return Err(NeuryxError::Inference(format!(
                "artifact {} produced a non-finite output",
                self.name
            )));
        }

        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Ok((value / RESCUE_DIVISOR).clamp(0.0, 1.0))
        }
    }
}
