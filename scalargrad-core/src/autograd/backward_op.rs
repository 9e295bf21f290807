use crate::error::ScalarGradError;
use crate::node_data::NodeId;

/// The local backward rule of a graph node.
///
/// Every node records the operation that produced it. The operands stored in
/// the variant are the node's dependencies, in positional order (index 0 is the
/// left operand). During the backward pass the rule turns the gradient flowing
/// into the node's output into one contribution per dependency, following the
/// chain rule:
///
/// \\[ \frac{dL}{d\text{input}_i} \mathrel{+}= \frac{dL}{d\text{output}} \cdot \frac{d\text{output}}{d\text{input}_i} \\]
///
/// Only the five primitives live here. Subtraction, division and `tanh` are
/// built from them and need no rule of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Input constant or trainable parameter. Propagates nothing.
    Leaf,
    /// `lhs + rhs`
    Add { lhs: NodeId, rhs: NodeId },
    /// `-input`
    Neg { input: NodeId },
    /// `lhs * rhs`
    Mul { lhs: NodeId, rhs: NodeId },
    /// `e^input`
    Exp { input: NodeId },
    /// `base^exponent` for a constant exponent.
    Pow { base: NodeId, exponent: f64 },
}

impl BackwardOp {
    /// Returns the dependencies of the node, in positional order.
    ///
    /// A node built from the same operand twice (`x + x`) lists it twice.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Neg { input } | BackwardOp::Exp { input } => vec![input],
            BackwardOp::Pow { base, .. } => vec![base],
        }
    }

    /// Human-readable operation tag: `scalar`, `+`, `-`, `*`, `exp` or `^n`.
    pub fn label(&self) -> String {
        match self {
            BackwardOp::Leaf => "scalar".to_string(),
            BackwardOp::Add { .. } => "+".to_string(),
            BackwardOp::Neg { .. } => "-".to_string(),
            BackwardOp::Mul { .. } => "*".to_string(),
            BackwardOp::Exp { .. } => "exp".to_string(),
            BackwardOp::Pow { exponent, .. } => format!("^{}", exponent),
        }
    }

    /// Computes the gradient contribution for each input.
    ///
    /// # Arguments
    /// * `grad_output`: the gradient accumulated on this node so far.
    /// * `output_value`: this node's forward value (the `exp` rule reuses it).
    /// * `input_values`: forward values of [`inputs`](Self::inputs), same order.
    ///
    /// # Returns
    /// `(input, delta)` pairs to be added into each input's gradient. The pairs
    /// follow the order of `inputs()`; a repeated input yields two pairs.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `input_values` does not hold one value per input.
    pub fn backward(
        &self,
        grad_output: f64,
        output_value: f64,
        input_values: &[f64],
    ) -> Result<Vec<(NodeId, f64)>, ScalarGradError> {
        let contributions = match (*self, input_values) {
            (BackwardOp::Leaf, []) => Vec::new(),
            (BackwardOp::Add { lhs, rhs }, [_, _]) => {
                vec![(lhs, 1.0 * grad_output), (rhs, 1.0 * grad_output)]
            }
            (BackwardOp::Neg { input }, [_]) => vec![(input, -1.0 * grad_output)],
            (BackwardOp::Mul { lhs, rhs }, &[lhs_value, rhs_value]) => vec![
                (lhs, rhs_value * grad_output),
                (rhs, lhs_value * grad_output),
            ],
            (BackwardOp::Exp { input }, [_]) => vec![(input, output_value * grad_output)],
            (BackwardOp::Pow { base, exponent }, &[base_value]) => vec![(
                base,
                exponent * base_value.powf(exponent - 1.0) * grad_output,
            )],
            (op, values) => {
                return Err(ScalarGradError::InputSizeMismatch {
                    expected: op.inputs().len(),
                    actual: values.len(),
                    operation: format!("backward of {}", op.label()),
                })
            }
        };
        Ok(contributions)
    }
}
