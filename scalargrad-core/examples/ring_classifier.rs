//! # Ring Classifier Training
//!
//! Trains a 2-4-4-1 tanh network to separate the inner cluster of the ring
//! dataset (target 1) from the points around it (target 0). Each step builds
//! one graph holding the forward pass of every sample and the summed
//! squared error, prints the loss, backpropagates and applies SGD.
//!
//! ## Execution
//! `cargo run --example ring_classifier`
//!
//! Set `RUST_LOG=debug` to see graph sizes per backward pass.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::model::Mlp;
use scalargrad_core::nn::{InitStrategy, MSELoss, Module, Reduction};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::{Graph, ScalarGradError};
use scalargrad_data::{ring_dataset, Dataset, Sampler, SequentialSampler};

/// Run settings for the demo.
#[derive(Debug, Clone)]
struct TrainConfig {
    learning_rate: f64,
    steps: usize,
    seed: u64,
    layer_sizes: Vec<usize>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.01,
            steps: 1_000,
            seed: 42,
            layer_sizes: vec![4, 4, 1],
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = TrainConfig::default();
    log::info!("Training with {:?}", config);

    let dataset = ring_dataset();
    let sampler = SequentialSampler::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut mlp = Mlp::new(2, &config.layer_sizes, &InitStrategy::default(), &mut rng)?;
    let loss_fn = MSELoss::new(Reduction::Sum);
    let mut optimizer = Sgd::new(config.learning_rate)?;

    for _ in 0..config.steps {
        let mut graph = Graph::new();
        let mut predictions = Vec::with_capacity(dataset.len());
        let mut targets = Vec::with_capacity(dataset.len());
        for index in sampler.iter(dataset.len()) {
            let (point, target) = dataset.get(index)?;
            let output = mlp.forward_values(&mut graph, &point)?;
            let prediction = output.first().copied().ok_or(ScalarGradError::EmptyInput {
                operation: "ring_classifier forward".to_string(),
            })?;
            predictions.push(prediction);
            targets.push(target);
        }

        let loss = loss_fn.calculate(&mut graph, &predictions, &targets)?;
        println!("{}", graph.value(loss)?);

        optimizer.zero_grad(&mut graph, loss)?;
        graph.backward(loss)?;
        optimizer.step(&mut mlp.parameters_mut(), &graph)?;
    }

    Ok(())
}
