//! Disease domains supported by the scoring pipeline.
//!
//! Every stage is parameterized by a [`Domain`]; the feature order defined
//! here is the one contract shared by extraction, the heuristic profiles,
//! and trained model artifacts.

use serde::{Deserialize, Serialize};

/// Number of biomarker features per domain.
pub const FEATURE_COUNT: usize = 7;

/// Ordered, fixed-length biomarker vector for one domain.
pub type FeatureVector = [f64; FEATURE_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Alzheimer,
    Parkinson,
}

impl Domain {
    /// Canonical feature order. A trained artifact's input order must match
    /// this exactly; no reordering happens after extraction.
    pub fn feature_names(&self) -> [&'static str; FEATURE_COUNT] {
        match self {
            Domain::Alzheimer => [
                "hippocampus_volume",
                "cortical_thickness",
                "ventricle_volume",
                "white_matter_hyperintensities",
                "brain_glucose_metabolism",
                "amyloid_deposition",
                "tau_protein_level",
            ],
            Domain::Parkinson => [
                "caudate_r",
                "caudate_l",
                "putamen_r",
                "putamen_l",
                "updrs_score",
                "smell_score",
                "cognitive_score",
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Alzheimer => "alzheimer",
            Domain::Parkinson => "parkinson",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
