// src/nn/mod.rs
//! Neural-network building blocks on top of the scalar graph: trainable
//! [`Parameter`]s, the [`Module`] trait, tanh [`Neuron`]s grouped into
//! [`Dense`] layers, initialisation strategies and the squared-error loss.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use init::InitStrategy;
pub use layers::{Dense, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
