// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;
use crate::ops::arithmetic::{mul_op, pow_op};

/// Divides `a` by `b`.
///
/// Built as `a * b^-1`, so the gradients come from the `*` and `^-1` rules.
/// Division by a zero-valued node produces `inf`/`NaN` and is not guarded.
pub fn div_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let reciprocal = pow_op(graph, b, -1.0)?;
    mul_op(graph, a, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
