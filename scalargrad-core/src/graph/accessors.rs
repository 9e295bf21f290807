// src/graph/accessors.rs
use crate::{autograd::BackwardOp, error::ScalarGradError, graph::Graph, node_data::NodeId};

impl Graph {
    /// Returns the id that tags every handle issued by this graph.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the forward value of a node.
    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.value)
    }

    /// Returns the gradient currently accumulated on a node.
    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.grad)
    }

    /// Returns the operation tag of a node (`"scalar"` for leaves).
    pub fn label(&self, id: NodeId) -> Result<String, ScalarGradError> {
        Ok(self.node(id)?.op.label())
    }

    /// Returns the backward rule of a node.
    pub fn op(&self, id: NodeId) -> Result<BackwardOp, ScalarGradError> {
        Ok(self.node(id)?.op)
    }

    /// Returns the direct dependencies of a node, in positional order.
    pub fn dependencies(&self, id: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        Ok(self.node(id)?.op.inputs())
    }

    /// Iterates over every node handle in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(move |index| NodeId::new(self.id, index))
    }
}
