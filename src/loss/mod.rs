pub mod mse;

pub use mse::{MseLoss, squared_error, mean_squared_error, try_mean_squared_error};
