// src/graph/op_methods.rs
//
// Method forms of the operations in `crate::ops`, so expressions read as
// `graph.times(a, b)` rather than `mul_op(&mut graph, a, b)`.

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::ops::math_elem::exp_op;

impl Graph {
    /// `a + b`. See [`add_op`].
    pub fn plus(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        add_op(self, a, b)
    }

    /// `-a`. See [`neg_op`].
    pub fn negate(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        neg_op(self, a)
    }

    /// `a - b`, built as `a + (-b)`. See [`sub_op`].
    pub fn minus(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        sub_op(self, a, b)
    }

    /// `a * b`. See [`mul_op`].
    pub fn times(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        mul_op(self, a, b)
    }

    /// `a / b`, built as `a * b^-1`. See [`div_op`].
    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        div_op(self, a, b)
    }

    /// `a^exponent` for a constant exponent. See [`pow_op`].
    pub fn pow(&mut self, a: NodeId, exponent: f64) -> Result<NodeId, ScalarGradError> {
        pow_op(self, a, exponent)
    }

    /// `e^a`. See [`exp_op`].
    pub fn exp(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        exp_op(self, a)
    }

    /// Hyperbolic tangent, composed from `exp`, `minus`, `plus` and `div`.
    /// See [`tanh_op`].
    pub fn tanh(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        tanh_op(self, a)
    }
}
