//! Trained predictor variants and their load-time capability tags.

use serde::{Deserialize, Serialize};

use neuryx_common::FeatureVector;

/// Inference method an artifact supports. Decided once when the artifact is
/// loaded; request-time dispatch is on this tag, never trial-and-error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceKind {
    /// Classifier producing a class-1 probability.
    Probability,
    /// Regressor producing a raw value in target units.
    Value,
}

impl InferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InferenceKind::Probability => "probability",
            InferenceKind::Value => "value",
        }
    }
}

/// Trained predictor weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predictor {
    /// Logistic classifier.
    Logistic { coefficients: Vec<f64>, intercept: f64 },
    /// Linear regressor.
    Linear { coefficients: Vec<f64>, intercept: f64 },
}

impl Predictor {
    pub fn kind(&self) -> InferenceKind {
        match self {
            Predictor::Logistic { .. } => InferenceKind::Probability,
            Predictor::Linear { .. } => InferenceKind::Value,
        }
    }

    pub fn coefficient_count(&self) -> usize {
        match self {
            Predictor::Logistic { coefficients, .. }
            | Predictor::Linear { coefficients, .. } => coefficients.len(),
        }
    }

    /// Raw model output: a probability for logistic predictors, a
    /// target-unit value for linear ones.
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        match self {
            Predictor::Logistic {
                coefficients,
                intercept,
            } => sigmoid(dot(coefficients, features) + intercept),
            Predictor::Linear {
                coefficients,
                intercept,
            } => dot(coefficients, features) + intercept,
        }
    }
}

fn dot(coefficients: &[f64], features: &FeatureVector) -> f64 {
    coefficients.iter().zip(features).map(|(c, x)| c * x).sum()
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
