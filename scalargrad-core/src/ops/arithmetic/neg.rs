use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;

// --- Forward Operation ---

/// Negates a node, producing `-a`.
///
/// Backward: the operand receives `-1 * grad`.
pub fn neg_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    Ok(graph.push(-a_value, BackwardOp::Neg { input: a }))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
