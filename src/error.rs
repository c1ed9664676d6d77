use thiserror::Error;

/// Errors returned by the perceptron core.
///
/// Every variant is a deterministic input-contract violation; nothing here is
/// transient, so callers should fix their input rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerceptronError {
    /// Two sequences that must have equal length do not.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// `train` was called with zero examples.
    #[error("training dataset is empty")]
    EmptyDataset,

    /// A perceptron needs at least one input.
    #[error("input dimension must be at least 1")]
    ZeroDimension,

    #[error("unknown activation function '{0}' (expected step, sigmoid or relu)")]
    UnknownActivation(String),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;

/// Returns `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_dim(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(PerceptronError::DimensionMismatch { expected, actual })
    }
}
