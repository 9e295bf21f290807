//! # Scalar Operations Module (`ops`)
//!
//! Operation constructors for the scalar [`Graph`](crate::graph::Graph).
//! Each takes one or two existing nodes (never raw numbers: wrap those with
//! [`Graph::leaf`](crate::graph::Graph::leaf) first), computes the forward value
//! immediately and appends a node recording its [`BackwardOp`](crate::autograd::BackwardOp).
//! No operation touches its operands; their gradients only change later, during
//! `backward()`.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** every operation is a free function `xxx_op(&mut graph, ...)`
//!   returning the new node's handle. [`Graph`](crate::graph::Graph) exposes the
//!   same operations as methods (`plus`, `times`, `pow`, ...).
//! - **Primitives vs. composites:** `add`, `neg`, `mul`, `pow` and `exp` carry a
//!   backward rule. `sub`, `div` and `tanh` are composed from them and only add
//!   nodes.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, neg, sub, mul, div, pow.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
