use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// Both figures are taken from the predictions the loop makes right before
/// each update, so they describe the model as it moved through the epoch
/// rather than its state at the end of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Mean squared error between predictions and labels over the epoch.
    pub mean_squared_error: f64,
    /// Number of samples whose prediction differed from the label.
    pub misclassified: usize,
}
