use perceptron_rs::{data, Perceptron};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> perceptron_rs::Result<()> {
    let (inputs, labels) = data::logic_and();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut model = Perceptron::random(2, &mut rng)?;
    println!("Initial weights: {:?}, bias = {:.4}", model.weights(), model.bias());

    model.train(&inputs, &labels)?;
    println!("Trained weights: {:?}, bias = {:.4}", model.weights(), model.bias());

    for input in &inputs {
        println!("Input: {:?} -> Output: {}", input, model.predict(input)?);
    }
    Ok(())
}
