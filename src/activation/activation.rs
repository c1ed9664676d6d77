use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

use crate::error::PerceptronError;

/// Scalar nonlinearity applied to the transfer value.
///
/// The set is closed: a threshold unit, the logistic function and the
/// rectifier. All three are total over finite inputs and carry no state, so a
/// value can be copied freely into any number of perceptrons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    /// Heaviside step: 0 for negative input, 1 otherwise.
    #[default]
    Step,
    Sigmoid,
    #[serde(rename = "relu")]
    ReLU,
}

impl ActivationFunction {
    /// Forward value.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Step => if x < 0.0 { 0.0 } else { 1.0 },
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x < 0.0 { 0.0 } else { x },
        }
    }

    /// Derivative of the activation.
    ///
    /// `Step` reports 0 everywhere. It is never read by the perceptron rule
    /// and must not be used for gradient-based learning.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Step => 0.0,
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::ReLU => if x < 0.0 { 0.0 } else { 1.0 },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Step => "step",
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::ReLU => "relu",
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationFunction {
    type Err = PerceptronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step" => Ok(ActivationFunction::Step),
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            "relu" => Ok(ActivationFunction::ReLU),
            _ => Err(PerceptronError::UnknownActivation(s.to_string())),
        }
    }
}
