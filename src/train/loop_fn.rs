use tracing::{info, trace};

use crate::error::{check_dim, PerceptronError, Result};
use crate::loss::mse::MseLoss;
use crate::model::perceptron::Perceptron;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `perceptron` online for exactly `config.epochs` epochs.
///
/// Each epoch walks `inputs` in their original order; every sample is
/// predicted and immediately followed by a perceptron-rule update, so the
/// update from sample `k` is visible to sample `k + 1`.
///
/// # Errors
/// - `EmptyDataset` if `inputs` is empty.
/// - `DimensionMismatch` if `inputs` and `outputs` differ in length; both
///   checks run before any parameter is touched.
/// - `DimensionMismatch` from the first sample whose length differs from the
///   model's. Training stops there and updates already applied are kept.
pub fn train_loop(
    perceptron: &mut Perceptron,
    inputs: &[Vec<f64>],
    outputs: &[f64],
    config: &TrainConfig,
) -> Result<()> {
    if inputs.is_empty() {
        return Err(PerceptronError::EmptyDataset);
    }
    check_dim(inputs.len(), outputs.len())?;

    info!(
        epochs = config.epochs,
        samples = inputs.len(),
        input_dim = perceptron.input_dim(),
        "training started"
    );

    let mut progress_open = config.progress_tx.is_some();
    let mut last: Option<EpochStats> = None;

    for epoch in 1..=config.epochs {
        let (mse, misclassified) = run_one_epoch(perceptron, inputs, outputs)?;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            mean_squared_error: mse,
            misclassified,
        };
        trace!(epoch, mse, misclassified, "epoch finished");

        if progress_open {
            if let Some(ref tx) = config.progress_tx {
                // A dropped receiver only stops reporting, never training.
                if tx.send(stats.clone()).is_err() {
                    progress_open = false;
                }
            }
        }
        last = Some(stats);
    }

    match last {
        Some(stats) => info!(
            mse = stats.mean_squared_error,
            misclassified = stats.misclassified,
            bias = perceptron.bias(),
            "training finished"
        ),
        None => info!("training finished without running any epoch"),
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One ordered pass over the data. Returns (mean squared error, misclassified)
/// measured on the pre-update predictions.
fn run_one_epoch(
    perceptron: &mut Perceptron,
    inputs: &[Vec<f64>],
    outputs: &[f64],
) -> Result<(f64, usize)> {
    let mut total_error = 0.0;
    let mut misclassified = 0;

    for (input, &expected) in inputs.iter().zip(outputs.iter()) {
        let observed = perceptron.predict(input)?;
        perceptron.optimize(input, expected, observed)?;

        total_error += MseLoss::squared_error(observed, expected);
        if observed != expected {
            misclassified += 1;
        }
    }

    Ok((total_error / inputs.len() as f64, misclassified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use std::sync::mpsc;

    fn and_gate() -> (Vec<Vec<f64>>, Vec<f64>) {
        (
            vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            vec![0.0, 0.0, 0.0, 1.0],
        )
    }

    fn zeroed() -> Perceptron {
        Perceptron::from_parts(vec![0.0, 0.0], 0.0, ActivationFunction::Step).unwrap()
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let mut p = zeroed();
        assert_eq!(
            train_loop(&mut p, &[], &[], &TrainConfig::default()),
            Err(PerceptronError::EmptyDataset)
        );
    }

    #[test]
    fn label_count_mismatch_leaves_model_untouched() {
        let mut p = zeroed();
        let before = p.clone();
        let (inputs, _) = and_gate();
        assert_eq!(
            train_loop(&mut p, &inputs, &[0.0, 1.0], &TrainConfig::default()),
            Err(PerceptronError::DimensionMismatch { expected: 4, actual: 2 })
        );
        assert_eq!(p, before);
    }

    #[test]
    fn malformed_sample_aborts_after_partial_update() {
        let mut p = zeroed();
        let inputs = vec![vec![1.0, 1.0], vec![1.0]];
        let err = train_loop(&mut p, &inputs, &[0.0, 1.0], &TrainConfig::default()).unwrap_err();
        assert_eq!(err, PerceptronError::DimensionMismatch { expected: 2, actual: 1 });
        // step(0) = 1 against label 0: one update of -0.5 went through.
        assert_eq!(p.weights(), &[-0.5, -0.5]);
        assert_eq!(p.bias(), -0.5);
    }

    #[test]
    fn zero_epochs_only_validates() {
        let mut p = zeroed();
        let before = p.clone();
        let (inputs, outputs) = and_gate();
        train_loop(&mut p, &inputs, &outputs, &TrainConfig::new(0)).unwrap();
        assert_eq!(p, before);
    }

    #[test]
    fn reports_one_stats_entry_per_epoch() {
        let (tx, rx) = mpsc::channel();
        let mut p = zeroed();
        let (inputs, outputs) = and_gate();
        train_loop(&mut p, &inputs, &outputs, &TrainConfig::new(25).with_progress(tx)).unwrap();

        let stats: Vec<EpochStats> = rx.try_iter().collect();
        assert_eq!(stats.len(), 25);
        assert_eq!(stats[0].epoch, 1);
        assert!(stats.iter().all(|s| s.total_epochs == 25));
        let last = stats.last().unwrap();
        assert_eq!(last.misclassified, 0);
        assert_eq!(last.mean_squared_error, 0.0);
    }

    #[test]
    fn dropped_receiver_does_not_stop_training() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut p = zeroed();
        let (inputs, outputs) = and_gate();
        train_loop(&mut p, &inputs, &outputs, &TrainConfig::new(50).with_progress(tx)).unwrap();
        for (x, y) in inputs.iter().zip(outputs.iter()) {
            assert_eq!(p.predict(x).unwrap(), *y);
        }
    }
}
