//! Feature extraction from loosely-structured request payloads.
//!
//! Clients send either the nested assessment shape (`datScan.caudateR`, ...)
//! or a flat mapping of clinical field names. Extraction tries the primary
//! scheme first, then the flat alternate, and fails naming the primary
//! dotted path.

use serde_json::Value;

use neuryx_common::{Domain, FeatureVector, NeuryxError, Result, FEATURE_COUNT};

/// Where one feature is found in the payload.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Primary key; dotted for nested lookup ("datScan.caudateR").
    pub primary: &'static str,
    /// Flat alternate tried when the primary is absent or non-numeric.
    pub flat: Option<&'static str>,
}

/// Ordered field specs for one domain. Order matches
/// [`Domain::feature_names`].
pub fn extraction_plan(domain: Domain) -> [FieldSpec; FEATURE_COUNT] {
    match domain {
        Domain::Alzheimer => [
            FieldSpec { primary: "hippocampus_volume",            flat: None },
            FieldSpec { primary: "cortical_thickness",            flat: None },
            FieldSpec { primary: "ventricle_volume",              flat: None },
            FieldSpec { primary: "white_matter_hyperintensities", flat: None },
            FieldSpec { primary: "brain_glucose_metabolism",      flat: None },
            FieldSpec { primary: "amyloid_deposition",            flat: None },
            FieldSpec { primary: "tau_protein_level",             flat: None },
        ],
        Domain::Parkinson => [
            FieldSpec { primary: "datScan.caudateR",          flat: Some("caudate_r") },
            FieldSpec { primary: "datScan.caudateL",          flat: Some("caudate_l") },
            FieldSpec { primary: "datScan.putamenR",          flat: Some("putamen_r") },
            FieldSpec { primary: "datScan.putamenL",          flat: Some("putamen_l") },
            FieldSpec { primary: "updrs.npdtot",              flat: Some("updrs_score") },
            FieldSpec { primary: "smellTest.upsitPercentage", flat: Some("smell_score") },
            FieldSpec { primary: "cognitive.cogchq",          flat: Some("cognitive_score") },
        ],
    }
}

/// Extract the ordered feature vector for `domain` from a JSON payload.
pub fn extract_features(domain: Domain, payload: &Value) -> Result<FeatureVector> {
    let plan = extraction_plan(domain);
    let mut features = [0.0; FEATURE_COUNT];
    for (slot, spec) in features.iter_mut().zip(plan.iter()) {
        *slot = extract_field(payload, spec)?;
    }
    Ok(features)
}

fn extract_field(payload: &Value, spec: &FieldSpec) -> Result<f64> {
    if let Some(v) = lookup_path(payload, spec.primary).and_then(coerce_numeric) {
        return Ok(v);
    }
    if let Some(flat) = spec.flat {
        if let Some(v) = payload.get(flat).and_then(coerce_numeric) {
            return Ok(v);
        }
    }
    Err(NeuryxError::Validation {
        field: spec.primary.to_string(),
    })
}

/// Walk a dotted path through nested objects.
fn lookup_path<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = payload;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Accept JSON numbers and finite numeric strings; reject everything else.
fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alzheimer_flat_extraction() {
        let payload = json!({
            "hippocampus_volume": 3.0,
            "cortical_thickness": 2.5,
            "ventricle_volume": 20,
            "white_matter_hyperintensities": 2,
            "brain_glucose_metabolism": 5.5,
            "amyloid_deposition": 1.0,
            "tau_protein_level": 1.3
        });
        let features = extract_features(Domain::Alzheimer, &payload).unwrap();
        assert_eq!(features, [3.0, 2.5, 20.0, 2.0, 5.5, 1.0, 1.3]);
    }

    #[test]
    fn test_parkinson_nested_extraction() {
        let payload = json!({
            "datScan": { "caudateR": 2.1, "caudateL": 2.3, "putamenR": 1.2, "putamenL": 1.4 },
            "updrs": { "npdtot": 35 },
            "smellTest": { "upsitPercentage": 22 },
            "cognitive": { "cogchq": 12 }
        });
        let features = extract_features(Domain::Parkinson, &payload).unwrap();
        assert_eq!(features, [2.1, 2.3, 1.2, 1.4, 35.0, 22.0, 12.0]);
    }

    #[test]
    fn test_parkinson_flat_fallback() {
        let payload = json!({
            "caudate_r": 2.1,
            "caudate_l": 2.3,
            "putamen_r": 1.2,
            "putamen_l": 1.4,
            "updrs_score": 35,
            "smell_score": 22,
            "cognitive_score": 12
        });
        let features = extract_features(Domain::Parkinson, &payload).unwrap();
        assert_eq!(features, [2.1, 2.3, 1.2, 1.4, 35.0, 22.0, 12.0]);
    }

    #[test]
    fn test_mixed_schemes_per_field() {
        // Nested where available, flat for the rest.
        let payload = json!({
            "datScan": { "caudateR": 2.1, "caudateL": 2.3, "putamenR": 1.2, "putamenL": 1.4 },
            "updrs_score": 35,
            "smell_score": 22,
            "cognitive_score": 12
        });
        let features = extract_features(Domain::Parkinson, &payload).unwrap();
        assert_eq!(features[4], 35.0);
    }

    #[test]
    fn test_missing_field_names_dotted_path() {
        let payload = json!({
            "datScan": { "caudateR": 2.1, "caudateL": 2.3, "putamenR": 1.2, "putamenL": 1.4 },
            "smellTest": { "upsitPercentage": 22 },
            "cognitive": { "cogchq": 12 }
        });
        let err = extract_features(Domain::Parkinson, &payload).unwrap_err();
        match err {
            NeuryxError::Validation { field } => assert_eq!(field, "updrs.npdtot"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let payload = json!({
            "hippocampus_volume": "3.0",
            "cortical_thickness": "2.5",
            "ventricle_volume": "20",
            "white_matter_hyperintensities": " 2 ",
            "brain_glucose_metabolism": "5.5",
            "amyloid_deposition": "1.0",
            "tau_protein_level": "1.3"
        });
        let features = extract_features(Domain::Alzheimer, &payload).unwrap();
        assert_eq!(features, [3.0, 2.5, 20.0, 2.0, 5.5, 1.0, 1.3]);
    }

    #[test]
    fn test_non_numeric_primary_falls_through_to_flat() {
        let payload = json!({
            "datScan": { "caudateR": "n/a", "caudateL": 2.3, "putamenR": 1.2, "putamenL": 1.4 },
            "caudate_r": 2.1,
            "updrs": { "npdtot": 35 },
            "smellTest": { "upsitPercentage": 22 },
            "cognitive": { "cogchq": 12 }
        });
        let features = extract_features(Domain::Parkinson, &payload).unwrap();
        assert_eq!(features[0], 2.1);
    }

    #[test]
    fn test_rejected_value_shapes() {
        for bad in [json!(true), json!(null), json!([3.0]), json!({"v": 3.0}), json!("NaN")] {
            let mut payload = json!({
                "hippocampus_volume": 3.0,
                "cortical_thickness": 2.5,
                "ventricle_volume": 20,
                "white_matter_hyperintensities": 2,
                "brain_glucose_metabolism": 5.5,
                "amyloid_deposition": 1.0,
                "tau_protein_level": 1.3
            });
            payload["tau_protein_level"] = bad;
            let err = extract_features(Domain::Alzheimer, &payload).unwrap_err();
            match err {
                NeuryxError::Validation { field } => assert_eq!(field, "tau_protein_level"),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }
}
