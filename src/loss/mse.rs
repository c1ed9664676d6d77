use crate::error::{check_dim, Result};

pub struct MseLoss;

impl MseLoss {
    /// Squared error of a single output: (output - target)²
    pub fn squared_error(output: f64, target: f64) -> f64 {
        (output - target).powi(2)
    }

    /// Scalar MSE: mean((output - target)²)
    ///
    /// Returns 0 when the lengths differ or both slices are empty. Use
    /// [`MseLoss::try_loss`] to tell a mismatch apart from a perfect score.
    pub fn loss(outputs: &[f64], targets: &[f64]) -> f64 {
        if outputs.len() != targets.len() || outputs.is_empty() {
            return 0.0;
        }
        Self::mean(outputs, targets)
    }

    /// Like [`MseLoss::loss`] but reports a length mismatch as an error.
    pub fn try_loss(outputs: &[f64], targets: &[f64]) -> Result<f64> {
        check_dim(outputs.len(), targets.len())?;
        if outputs.is_empty() {
            return Ok(0.0);
        }
        Ok(Self::mean(outputs, targets))
    }

    fn mean(outputs: &[f64], targets: &[f64]) -> f64 {
        let n = outputs.len() as f64;
        outputs.iter().zip(targets.iter())
            .map(|(o, t)| Self::squared_error(*o, *t))
            .sum::<f64>() / n
    }
}

pub fn squared_error(output: f64, target: f64) -> f64 {
    MseLoss::squared_error(output, target)
}

pub fn mean_squared_error(outputs: &[f64], targets: &[f64]) -> f64 {
    MseLoss::loss(outputs, targets)
}

pub fn try_mean_squared_error(outputs: &[f64], targets: &[f64]) -> Result<f64> {
    MseLoss::try_loss(outputs, targets)
}
