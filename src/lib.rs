pub mod error;
pub mod activation;
pub mod loss;
pub mod model;
pub mod train;
pub mod data;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use activation::activation::ActivationFunction;
pub use model::perceptron::Perceptron;
pub use model::spec::PerceptronSpec;
pub use loss::mse::{MseLoss, squared_error, mean_squared_error, try_mean_squared_error};
pub use train::train_config::TrainConfig;
pub use train::epoch_stats::EpochStats;
pub use train::loop_fn::train_loop;
