// src/node_data.rs
use crate::autograd::BackwardOp;
use std::fmt;

/// Handle to a node stored in a [`Graph`](crate::graph::Graph).
///
/// A `NodeId` is the arena index of the node plus the id of the graph that
/// issued it. Handles are `Copy` and compare by identity: two nodes holding
/// the same value are still different nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: usize,
    pub(crate) index: usize,
}

impl NodeId {
    pub(crate) fn new(graph: usize, index: usize) -> Self {
        NodeId { graph, index }
    }

    /// Position of the node in its graph's arena.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Id of the graph that issued this handle.
    pub fn graph_id(&self) -> usize {
        self.graph
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Internal storage for one scalar node of the computation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Forward value, fixed at construction.
    pub(crate) value: f64,
    /// Accumulated gradient of the last backward root with respect to this node.
    pub(crate) grad: f64,
    /// The operation that produced this node. Its operands are the node's
    /// dependencies, in positional order.
    pub(crate) op: BackwardOp,
}

impl NodeData {
    pub(crate) fn new(value: f64, op: BackwardOp) -> Self {
        NodeData {
            value,
            grad: 0.0,
            op,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &BackwardOp {
        &self.op
    }

    /// Returns `true` if the node has no dependencies.
    pub fn is_leaf(&self) -> bool {
        matches!(self.op, BackwardOp::Leaf)
    }
}
