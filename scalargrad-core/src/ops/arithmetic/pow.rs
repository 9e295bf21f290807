// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;

// --- Forward Operation ---

/// Raises a node to a constant power, producing `a^exponent`.
///
/// The exponent is a plain number, not a node, and receives no gradient.
/// Backward: `a` receives `exponent * a^(exponent - 1) * grad`.
///
/// A zero base with a negative exponent, or a negative base with a fractional
/// exponent, yields `inf`/`NaN` under IEEE-754 rules. These values are not
/// intercepted and flow through the rest of the graph.
pub fn pow_op(graph: &mut Graph, a: NodeId, exponent: f64) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    Ok(graph.push(
        a_value.powf(exponent),
        BackwardOp::Pow { base: a, exponent },
    ))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
