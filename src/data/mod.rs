pub mod builtin;

pub use builtin::{
    Dataset, logic_and, logic_or, logic_xor, circles, quadratic_features, quadratic_dataset,
    accuracy, predict_all,
};
