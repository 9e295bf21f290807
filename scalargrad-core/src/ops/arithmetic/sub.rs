// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;
use crate::ops::arithmetic::{add_op, neg_op};

/// Subtracts `b` from `a`.
///
/// Built as `a + (-b)`: it adds a `-` node and a `+` node to the graph and
/// has no backward rule of its own.
pub fn sub_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let negated = neg_op(graph, b)?;
    add_op(graph, a, negated)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
