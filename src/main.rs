//! perceptron-rs demo
//!
//! Trains a single perceptron on one of the built-in datasets and reports how
//! well it fits.
//!
//! Run with:
//!   cargo run -- and --seed 42
//!   cargo run -- circles --points 360 --json

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use perceptron_rs::data::{self, Dataset};
use perceptron_rs::{mean_squared_error, ActivationFunction, Perceptron, PerceptronSpec, TrainConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DatasetKind {
    And,
    Or,
    Xor,
    /// Two noisy concentric rings, lifted to quadratic features.
    Circles,
}

#[derive(Debug, Parser)]
#[command(name = "perceptron-rs", about = "Train a single-layer perceptron on a toy dataset")]
struct Cli {
    #[arg(value_enum)]
    dataset: DatasetKind,

    /// step, sigmoid or relu
    #[arg(long, default_value = "step")]
    activation: ActivationFunction,

    #[arg(long, default_value_t = perceptron_rs::train::DEFAULT_EPOCHS)]
    epochs: usize,

    #[arg(long, default_value_t = perceptron_rs::model::DEFAULT_LEARNING_RATE)]
    learning_rate: f64,

    /// Points per ring for the circles dataset.
    #[arg(long, default_value_t = 360)]
    points: usize,

    /// Seed for weight initialisation and data generation.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON construction spec; overrides --activation and --learning-rate.
    #[arg(long)]
    spec: Option<String>,

    /// Print a JSON report instead of the prediction table.
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    activation: ActivationFunction,
    epochs: usize,
    initial_weights: Vec<f64>,
    initial_bias: f64,
    weights: &'a [f64],
    bias: f64,
    accuracy: f64,
    mean_squared_error: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (inputs, labels) = load_dataset(&cli, &mut rng)?;
    let input_dim = inputs.first().map(|x| x.len()).unwrap_or(0);

    let spec = match &cli.spec {
        Some(path) => PerceptronSpec::load_json(path)
            .with_context(|| format!("reading perceptron spec from {path}"))?,
        None => PerceptronSpec {
            activation: cli.activation,
            learning_rate: cli.learning_rate,
            ..PerceptronSpec::new(input_dim)
        },
    };
    let mut model = spec.build(&mut rng).context("constructing perceptron")?;

    let initial_weights = model.weights().to_vec();
    let initial_bias = model.bias();
    info!(weights = ?initial_weights, bias = initial_bias, "initial parameters");

    model
        .train_with(&inputs, &labels, &TrainConfig::new(cli.epochs))
        .context("training perceptron")?;
    info!(weights = ?model.weights(), bias = model.bias(), "trained parameters");

    let predictions = data::predict_all(&model, &inputs)?;
    let accuracy = data::accuracy(&model, &inputs, &labels)?;
    let mse = mean_squared_error(&predictions, &labels);
    info!(accuracy, mse, "evaluation on training data");

    if cli.json {
        let report = Report {
            activation: model.activation(),
            epochs: cli.epochs,
            initial_weights,
            initial_bias,
            weights: model.weights(),
            bias: model.bias(),
            accuracy,
            mean_squared_error: mse,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_predictions(&model, &inputs, &labels, &predictions);
    }

    Ok(())
}

fn load_dataset(cli: &Cli, rng: &mut StdRng) -> Result<Dataset> {
    Ok(match cli.dataset {
        DatasetKind::And => data::logic_and(),
        DatasetKind::Or => data::logic_or(),
        DatasetKind::Xor => data::logic_xor(),
        DatasetKind::Circles => {
            let (points, labels) = data::circles(cli.points, rng);
            anyhow::ensure!(!points.is_empty(), "--points must be at least 1");
            (data::quadratic_dataset(&points)?, labels)
        }
    })
}

fn print_predictions(model: &Perceptron, inputs: &[Vec<f64>], labels: &[f64], predictions: &[f64]) {
    println!("weights = {:?}, bias = {:.4}", model.weights(), model.bias());
    // Long datasets only show their head.
    for ((input, label), prediction) in inputs.iter().zip(labels).zip(predictions).take(16) {
        println!("Input: {:?} -> Output: {:.4} (label {})", input, prediction, label);
    }
    if inputs.len() > 16 {
        println!("... {} more samples", inputs.len() - 16);
    }
}
