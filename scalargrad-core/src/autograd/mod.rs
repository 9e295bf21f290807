//! # Autograd (`autograd`)
//!
//! Reverse-mode differentiation over the scalar [`Graph`](crate::graph::Graph).
//!
//! - [`backward_op`]: the [`BackwardOp`] rule stored on every node.
//! - [`graph`]: the topological ordering used by the backward pass.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::topological_sort;
