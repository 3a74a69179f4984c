use thiserror::Error;

#[derive(Debug, Error)]
pub enum NeuryxError {
    /// Missing or non-numeric input field. Always surfaced to the caller.
    #[error("Missing or non-numeric field: {field}")]
    Validation { field: String },

    /// Artifact absent or failed to load. Absorbed by the blending policy.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Scaling or prediction failed at request time. Absorbed by the
    /// blending policy.
    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl NeuryxError {
    /// The model-path failures the blending policy recovers from locally.
    pub fn is_model_fault(&self) -> bool {
        matches!(
            self,
            NeuryxError::ModelUnavailable(_) | NeuryxError::Inference(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NeuryxError>;
