// src/graph/mod.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node_data::{NodeData, NodeId};
use std::sync::atomic::{AtomicUsize, Ordering};

mod accessors;
mod autograd_methods;
pub mod debug;
mod op_methods;

pub use debug::GraphDisplay;

static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// An append-only arena of scalar nodes forming a computation graph.
///
/// Nodes are created by [`leaf`](Graph::leaf) or by an operation
/// (`plus`, `times`, `pow`, ...), which computes the forward value at once and
/// records the backward rule. Existing nodes are never rewritten: a node's
/// dependencies always sit at smaller arena indices, so the graph is a DAG by
/// construction. After construction only the gradients change, through
/// [`backward`](Graph::backward) and [`zero_grad`](Graph::zero_grad).
///
/// Nodes are addressed by [`NodeId`] handles. Each graph has its own id and
/// rejects handles issued by another graph. Dropping the graph frees every
/// node at once.
#[derive(Debug)]
pub struct Graph {
    id: usize,
    pub(crate) nodes: Vec<NodeData>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Creates a leaf node holding `value`, with a zero gradient.
    ///
    /// Leaves are the inputs and trainable parameters of an expression. They
    /// have no dependencies and their label is `"scalar"`.
    ///
    /// # Errors
    /// Returns `NonFiniteValue` if `value` is NaN or infinite.
    pub fn leaf(&mut self, value: f64) -> Result<NodeId, ScalarGradError> {
        if !value.is_finite() {
            return Err(ScalarGradError::NonFiniteValue {
                value,
                operation: "leaf".to_string(),
            });
        }
        Ok(self.push(value, BackwardOp::Leaf))
    }

    /// Alias of [`leaf`](Graph::leaf).
    pub fn scalar(&mut self, value: f64) -> Result<NodeId, ScalarGradError> {
        self.leaf(value)
    }

    /// Appends a node without validating its operands.
    ///
    /// Operations validate their inputs with [`node`](Graph::node) before
    /// calling this.
    pub(crate) fn push(&mut self, value: f64, op: BackwardOp) -> NodeId {
        let id = NodeId::new(self.id, self.nodes.len());
        self.nodes.push(NodeData::new(value, op));
        id
    }

    /// Resolves a handle to its node.
    ///
    /// # Errors
    /// * `ForeignNode` if the handle was issued by another graph.
    /// * `NodeNotFound` if the index is past the end of the arena.
    pub fn node(&self, id: NodeId) -> Result<&NodeData, ScalarGradError> {
        if id.graph != self.id {
            return Err(ScalarGradError::ForeignNode {
                expected: self.id,
                actual: id.graph,
            });
        }
        self.nodes.get(id.index).ok_or(ScalarGradError::NodeNotFound {
            index: id.index,
            len: self.nodes.len(),
        })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, ScalarGradError> {
        if id.graph != self.id {
            return Err(ScalarGradError::ForeignNode {
                expected: self.id,
                actual: id.graph,
            });
        }
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index)
            .ok_or(ScalarGradError::NodeNotFound { index: id.index, len })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
