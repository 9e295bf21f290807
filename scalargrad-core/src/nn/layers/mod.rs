// src/nn/layers/mod.rs

pub mod dense;
pub mod neuron;

pub use dense::Dense;
pub use neuron::Neuron;
