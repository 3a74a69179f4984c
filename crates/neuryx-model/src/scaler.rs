//! Input/output scalers recorded at training time.

use serde::{Deserialize, Serialize};

use neuryx_common::FeatureVector;

/// Per-column scaling parameters bundled with a trained artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// Zero-mean, unit-variance scaling.
    Standard { mean: Vec<f64>, std: Vec<f64> },
    /// Scales each column onto [0,1] over the training range.
    MinMax { min: Vec<f64>, max: Vec<f64> },
}

impl Scaler {
    /// Number of columns this scaler carries parameters for.
    pub fn len(&self) -> usize {
        match self {
            Scaler::Standard { mean, .. } => mean.len(),
            Scaler::MinMax { min, .. } => min.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both parameter arrays must describe the same columns.
    pub fn is_consistent(&self) -> bool {
        match self {
            Scaler::Standard { mean, std } => mean.len() == std.len(),
            Scaler::MinMax { min, max } => min.len() == max.len(),
        }
    }

    /// Forward transform of a feature vector. A zero spread (constant
    /// training column) scales by 1 instead of dividing by zero.
    pub fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut out = *features;
        match self {
            Scaler::Standard { mean, std } => {
                for ((v, m), sd) in out.iter_mut().zip(mean).zip(std) {
                    let sd = if sd.abs() < f64::EPSILON { 1.0 } else { *sd };
                    *v = (*v - m) / sd;
                }
            }
            Scaler::MinMax { min, max } => {
                for ((v, lo), hi) in out.iter_mut().zip(min).zip(max) {
                    let range = hi - lo;
                    let range = if range.abs() < f64::EPSILON { 1.0 } else { range };
                    *v = (*v - lo) / range;
                }
            }
        }
        out
    }

    /// Inverse transform of a single model output back to original units.
    /// Target scalers carry one column; the first column's parameters apply.
    pub fn inverse_transform_one(&self, value: f64) -> f64 {
        match self {
            Scaler::Standard { mean, std } => {
                let m = mean.first().copied().unwrap_or(0.0);
                let sd = match std.first() {
                    Some(sd) if sd.abs() >= f64::EPSILON => *sd,
                    _ => 1.0,
                };
                value * sd + m
            }
            Scaler::MinMax { min, max } => {
                let lo = min.first().copied().unwrap_or(0.0);
                let hi = max.first().copied().unwrap_or(1.0);
                let range = hi - lo;
                let range = if range.abs() < f64::EPSILON { 1.0 } else { range };
                value * range + lo
            }
        }
    }
}
