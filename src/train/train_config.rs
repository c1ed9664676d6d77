use std::sync::mpsc;
use crate::train::epoch_stats::EpochStats;

/// Number of epochs `Perceptron::train` runs when no config is given.
pub const DEFAULT_EPOCHS: usize = 1000;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`: total number of full passes over the training data. The loop
///   always runs all of them; there is no convergence check.
/// - `progress_tx`: optional channel sender; one `EpochStats` is sent per
///   completed epoch.  A dropped receiver is ignored and training carries on.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_EPOCHS)
    }
}
