use perceptron_rs::{
    data, mean_squared_error, ActivationFunction, Perceptron, PerceptronError, TrainConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn zeroed() -> Perceptron {
    Perceptron::from_parts(vec![0.0, 0.0], 0.0, ActivationFunction::Step).unwrap()
}

#[test]
fn learns_and_from_random_start() {
    let (inputs, labels) = data::logic_and();
    for seed in [0, 1, 7, 42, 1234] {
        let mut model = Perceptron::random(2, &mut StdRng::seed_from_u64(seed)).unwrap();
        model.train(&inputs, &labels).unwrap();
        for (x, y) in inputs.iter().zip(labels.iter()) {
            assert_eq!(model.predict(x).unwrap(), *y, "seed {seed}, input {x:?}");
        }
    }
}

#[test]
fn learns_or() {
    let (inputs, labels) = data::logic_or();
    let mut model = Perceptron::random(2, &mut StdRng::seed_from_u64(5)).unwrap();
    model.train(&inputs, &labels).unwrap();
    assert_eq!(data::accuracy(&model, &inputs, &labels).unwrap(), 1.0);
}

#[test]
fn xor_is_out_of_reach() {
    let (inputs, labels) = data::logic_xor();
    let mut model = Perceptron::random(2, &mut StdRng::seed_from_u64(5)).unwrap();
    model.train(&inputs, &labels).unwrap();
    assert!(data::accuracy(&model, &inputs, &labels).unwrap() < 1.0);
}

#[test]
fn retraining_a_converged_model_changes_nothing() {
    let (inputs, labels) = data::logic_and();
    let mut model = Perceptron::random(2, &mut StdRng::seed_from_u64(11)).unwrap();
    model.train(&inputs, &labels).unwrap();
    let converged = model.clone();

    model.train(&inputs, &labels).unwrap();
    assert_eq!(model, converged);
}

#[test]
fn sample_order_matters() {
    let (inputs, labels) = data::logic_and();
    let mut forward = zeroed();
    forward.train(&inputs, &labels).unwrap();

    let rev_inputs: Vec<Vec<f64>> = inputs.iter().rev().cloned().collect();
    let rev_labels: Vec<f64> = labels.iter().rev().cloned().collect();
    let mut backward = zeroed();
    backward.train(&rev_inputs, &rev_labels).unwrap();

    assert_eq!(forward.weights(), &[1.0, 0.5]);
    assert_eq!(backward.weights(), &[0.5, 1.0]);
    assert_eq!(forward.bias(), backward.bias());
}

#[test]
fn same_seed_trains_identically() {
    let (inputs, labels) = data::logic_or();
    let mut a = Perceptron::random(2, &mut StdRng::seed_from_u64(9)).unwrap();
    let mut b = Perceptron::random(2, &mut StdRng::seed_from_u64(9)).unwrap();
    a.train_with(&inputs, &labels, &TrainConfig::new(10)).unwrap();
    b.train_with(&inputs, &labels, &TrainConfig::new(10)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn training_contract_errors() {
    let mut model = zeroed();
    assert_eq!(model.train(&[], &[]), Err(PerceptronError::EmptyDataset));
    assert_eq!(
        model.train(&[vec![1.0, 0.0]], &[1.0, 0.0]),
        Err(PerceptronError::DimensionMismatch { expected: 1, actual: 2 })
    );
    assert_eq!(model, zeroed());
}

#[test]
fn trained_predictions_score_zero_mse() {
    let (inputs, labels) = data::logic_and();
    let mut model = zeroed();
    model.train(&inputs, &labels).unwrap();
    let predictions = data::predict_all(&model, &inputs).unwrap();
    assert_eq!(mean_squared_error(&predictions, &labels), 0.0);
}
