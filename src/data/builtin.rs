//! Built-in toy datasets and feature helpers.
//!
//! These play the role of an external data source: they only produce
//! `(inputs, labels)` pairs for the model and read its predictions back.
//! Labels are 0.0 / 1.0 throughout.

use rand::Rng;

use crate::error::{check_dim, Result};
use crate::model::perceptron::Perceptron;

/// A dataset as parallel feature vectors and scalar labels.
pub type Dataset = (Vec<Vec<f64>>, Vec<f64>);

// ---------------------------------------------------------------------------
// Truth tables
// ---------------------------------------------------------------------------

fn truth_table(gate: impl Fn(bool, bool) -> bool) -> Dataset {
    let mut inputs = Vec::with_capacity(4);
    let mut labels = Vec::with_capacity(4);
    for a in [false, true] {
        for b in [false, true] {
            inputs.push(vec![a as u8 as f64, b as u8 as f64]);
            labels.push(gate(a, b) as u8 as f64);
        }
    }
    (inputs, labels)
}

/// Logical AND over inputs in the order 00, 01, 10, 11.
pub fn logic_and() -> Dataset {
    truth_table(|a, b| a && b)
}

pub fn logic_or() -> Dataset {
    truth_table(|a, b| a || b)
}

/// Logical XOR. Not linearly separable, so a single perceptron cannot fit it.
pub fn logic_xor() -> Dataset {
    truth_table(|a, b| a != b)
}

// ---------------------------------------------------------------------------
// Concentric rings
// ---------------------------------------------------------------------------

/// Jitter applied to each ring radius.
const RING_NOISE: f64 = 0.1;

/// `n` points on a ring of radius `r` around the origin, radius jittered by
/// ±`RING_NOISE`. Angles step by `360 / n` and are fed to sin/cos as radians,
/// which scatters the points around the ring instead of sweeping it once.
fn ring<R: Rng + ?Sized>(r: f64, n: usize, rng: &mut R) -> Vec<Vec<f64>> {
    let step = 360.0 / n as f64;
    (0..n)
        .map(|k| {
            let angle = k as f64 * step;
            let radius = r + rng.gen_range(-RING_NOISE..=RING_NOISE);
            vec![angle.cos() * radius, angle.sin() * radius]
        })
        .collect()
}

/// Two concentric rings: radius 1 labelled 0, radius 2 labelled 1.
/// Returns `2 * n` samples, inner ring first.
pub fn circles<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Dataset {
    if n == 0 {
        return (Vec::new(), Vec::new());
    }
    let mut inputs = ring(1.0, n, rng);
    inputs.extend(ring(2.0, n, rng));
    let mut labels = vec![0.0; n];
    labels.extend(std::iter::repeat(1.0).take(n));
    (inputs, labels)
}

/// Lifts a 2-D point `[x, y]` to `[x, y, x², xy, y²]`, which makes the rings
/// linearly separable.
pub fn quadratic_features(point: &[f64]) -> Result<Vec<f64>> {
    check_dim(2, point.len())?;
    let (x, y) = (point[0], point[1]);
    Ok(vec![x, y, x * x, x * y, y * y])
}

/// Applies [`quadratic_features`] to every point.
pub fn quadratic_dataset(points: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    points.iter().map(|p| quadratic_features(p)).collect()
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Fraction of samples whose prediction equals the label exactly.
pub fn accuracy(model: &Perceptron, inputs: &[Vec<f64>], labels: &[f64]) -> Result<f64> {
    check_dim(inputs.len(), labels.len())?;
    if inputs.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for (input, label) in inputs.iter().zip(labels.iter()) {
        if model.predict(input)? == *label {
            correct += 1;
        }
    }
    Ok(correct as f64 / inputs.len() as f64)
}

/// Predictions for every input, in order.
pub fn predict_all(model: &Perceptron, inputs: &[Vec<f64>]) -> Result<Vec<f64>> {
    inputs.iter().map(|x| model.predict(x)).collect()
}
