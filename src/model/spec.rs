use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::model::perceptron::{Perceptron, DEFAULT_LEARNING_RATE};

/// A serializable description of how to construct a [`Perceptron`].
///
/// Only the construction inputs are described here; trained parameters are
/// never written back. Missing `weights` are drawn at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerceptronSpec {
    /// Number of input features.
    pub input_dim: usize,
    #[serde(default)]
    pub bias: Option<f64>,
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    #[serde(default)]
    pub activation: ActivationFunction,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

impl PerceptronSpec {
    pub fn new(input_dim: usize) -> Self {
        PerceptronSpec {
            input_dim,
            bias: None,
            weights: None,
            activation: ActivationFunction::default(),
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    /// Constructs the perceptron, validating the same way [`Perceptron::new`] does.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Perceptron> {
        let mut p = Perceptron::new(
            self.input_dim,
            self.bias,
            self.weights.clone(),
            Some(self.activation),
            rng,
        )?;
        p.set_learning_rate(self.learning_rate);
        Ok(p)
    }

    /// Reads a spec from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<PerceptronSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
