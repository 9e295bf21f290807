//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over scalar expression graphs.
//!
//! Expressions are built in a [`Graph`] arena: leaves hold input values,
//! every operation appends a node that records its forward value and the
//! rule to push gradients back to its operands. [`Graph::backward`] then
//! fills in `d(root)/d(node)` for every node the root depends on.
//!
//! ```
//! use scalargrad_core::{Graph, ScalarGradError};
//!
//! # fn main() -> Result<(), ScalarGradError> {
//! let mut graph = Graph::new();
//! let a = graph.leaf(2.0)?;
//! let b = graph.leaf(3.0)?;
//! let ab = graph.times(a, b)?;
//! let y = graph.plus(ab, a)?;
//! graph.backward(y)?;
//! assert_eq!(graph.grad(a)?, 4.0);
//! assert_eq!(graph.grad(b)?, 2.0);
//! # Ok(())
//! # }
//! ```
//!
//! The [`nn`], [`model`] and [`optim`] modules build small tanh networks and
//! train them by gradient descent on top of the same graph.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod model;
pub mod nn;
pub mod node_data;
pub mod ops;
pub mod optim;
pub mod utils;

pub use autograd::BackwardOp;
pub use error::ScalarGradError;
pub use graph::Graph;
pub use node_data::{NodeData, NodeId};
// Re-export traits required by public functions
pub use num_traits;
