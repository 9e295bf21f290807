// src/optim/mod.rs

//! Optimizers for training scalar networks.
//!
//! This module provides the [`Optimizer`] trait and stochastic gradient
//! descent ([`Sgd`]).

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
