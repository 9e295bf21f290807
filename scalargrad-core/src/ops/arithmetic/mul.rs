// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;

// --- Forward Operation ---

/// Multiplies two nodes, producing `a * b`.
///
/// Backward: `a` receives `b * grad` and `b` receives `a * grad`, using the
/// operands' forward values.
///
/// # Errors
/// Returns `NodeNotFound` or `ForeignNode` if either handle is invalid for `graph`.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    Ok(graph.push(a_value * b_value, BackwardOp::Mul { lhs: a, rhs: b }))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
