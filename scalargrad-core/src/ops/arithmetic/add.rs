// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;

// --- Forward Operation ---

/// Adds two nodes, producing a new node `a + b`.
///
/// Backward: both operands receive the incoming gradient unchanged.
///
/// # Errors
/// Returns `NodeNotFound` or `ForeignNode` if either handle is invalid for `graph`.
pub fn add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    Ok(graph.push(a_value + b_value, BackwardOp::Add { lhs: a, rhs: b }))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
