// scalargrad-core/src/ops/activation/tanh.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;
use crate::ops::arithmetic::{add_op, div_op, mul_op, sub_op};
use crate::ops::math_elem::exp_op;

/// Hyperbolic tangent of a node.
///
/// Composed from primitives as `(e - 1) / (e + 1)` with `e = exp(a * 2)`, so its
/// gradient comes out of the `*`, `exp`, `+`, `-` and `^-1` rules and equals
/// `1 - tanh(a)^2`. The constants `2`, `1` and `1` are added to the graph as
/// leaves.
pub fn tanh_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let two = graph.leaf(2.0)?;
    let doubled = mul_op(graph, a, two)?;
    let e = exp_op(graph, doubled)?;

    let one = graph.leaf(1.0)?;
    let numerator = sub_op(graph, e, one)?;
    let one = graph.leaf(1.0)?;
    let denominator = add_op(graph, e, one)?;
    div_op(graph, numerator, denominator)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
