use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;

// --- Forward Operation ---

/// Computes `e^a`.
///
/// Backward: `a` receives `e^a * grad`. The rule reuses the node's own forward
/// value instead of recomputing the exponential.
pub fn exp_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    Ok(graph.push(a_value.exp(), BackwardOp::Exp { input: a }))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
