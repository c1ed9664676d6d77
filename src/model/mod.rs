pub mod perceptron;
pub mod spec;

pub use perceptron::{Perceptron, DEFAULT_LEARNING_RATE};
pub use spec::PerceptronSpec;
