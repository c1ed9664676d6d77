use rand::Rng;
use tracing::debug;

use crate::activation::activation::ActivationFunction;
use crate::error::{check_dim, PerceptronError, Result};
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Learning rate a freshly constructed perceptron starts with.
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

/// A single linear threshold unit: `activation(w · x + b)`.
///
/// The weight vector length is fixed at construction and every input passed to
/// [`transfer`](Perceptron::transfer), [`predict`](Perceptron::predict),
/// [`optimize`](Perceptron::optimize) or [`train`](Perceptron::train) must
/// match it.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Vec<f64>,
    bias: f64,
    activation: ActivationFunction,
    /// Step size η of the perceptron rule.
    learning_rate: f64,
}

impl Perceptron {
    /// Builds a perceptron over `input_dim` features.
    ///
    /// - `bias` defaults to 0.
    /// - `weights`, when given, must have exactly `input_dim` entries;
    ///   otherwise each weight is drawn uniformly from [-1, 1] using `rng`.
    /// - `activation` defaults to [`ActivationFunction::Step`].
    pub fn new<R: Rng + ?Sized>(
        input_dim: usize,
        bias: Option<f64>,
        weights: Option<Vec<f64>>,
        activation: Option<ActivationFunction>,
        rng: &mut R,
    ) -> Result<Perceptron> {
        if input_dim == 0 {
            return Err(PerceptronError::ZeroDimension);
        }
        let drawn = weights.is_none();
        let weights = match weights {
            Some(w) => {
                check_dim(input_dim, w.len())?;
                w
            }
            None => (0..input_dim).map(|_| rng.gen_range(-1.0..=1.0)).collect(),
        };
        let activation = activation.unwrap_or_default();

        debug!(input_dim, %activation, drawn, "constructed perceptron");

        Ok(Perceptron {
            weights,
            bias: bias.unwrap_or(0.0),
            activation,
            learning_rate: DEFAULT_LEARNING_RATE,
        })
    }

    /// Step-activated perceptron with random weights and zero bias.
    pub fn random<R: Rng + ?Sized>(input_dim: usize, rng: &mut R) -> Result<Perceptron> {
        Perceptron::new(input_dim, None, None, None, rng)
    }

    /// Builds a perceptron from explicit parameters; no randomness involved.
    pub fn from_parts(
        weights: Vec<f64>,
        bias: f64,
        activation: ActivationFunction,
    ) -> Result<Perceptron> {
        if weights.is_empty() {
            return Err(PerceptronError::ZeroDimension);
        }
        Ok(Perceptron {
            weights,
            bias,
            activation,
            learning_rate: DEFAULT_LEARNING_RATE,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    /// Weighted sum of `input` plus bias, before activation.
    pub fn transfer(&self, input: &[f64]) -> Result<f64> {
        check_dim(self.weights.len(), input.len())?;
        let sum: f64 = input.iter().zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum();
        Ok(sum + self.bias)
    }

    /// Model output for `input`.
    pub fn predict(&self, input: &[f64]) -> Result<f64> {
        let z = self.transfer(input)?;
        Ok(self.activation.function(z))
    }

    /// Applies one perceptron-rule update: `w += η·x·(expected - observed)`
    /// and `b += η·(expected - observed)`.
    ///
    /// The activation derivative is deliberately not consulted.
    pub fn optimize(&mut self, input: &[f64], expected: f64, observed: f64) -> Result<()> {
        check_dim(self.weights.len(), input.len())?;
        let delta = self.learning_rate * (expected - observed);
        for (w, x) in self.weights.iter_mut().zip(input.iter()) {
            *w += delta * x;
        }
        self.bias += delta;
        Ok(())
    }

    /// Trains for the default 1000 epochs over `inputs` in order.
    pub fn train(&mut self, inputs: &[Vec<f64>], outputs: &[f64]) -> Result<()> {
        self.train_with(inputs, outputs, &TrainConfig::default())
    }

    /// Trains with an explicit [`TrainConfig`].
    pub fn train_with(
        &mut self,
        inputs: &[Vec<f64>],
        outputs: &[f64],
        config: &TrainConfig,
    ) -> Result<()> {
        train_loop(self, inputs, outputs, config)
    }
}
