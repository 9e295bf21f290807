use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;
use std::cell::Cell;
use std::fmt;

/// A learnable scalar of a [`Module`](crate::nn::Module).
///
/// Graph nodes are immutable, so a parameter keeps its current value outside
/// any graph. The first [`bind`](Parameter::bind) into a graph places the value
/// there as a leaf; every later `bind` into the same graph returns that leaf.
/// A parameter used by many samples is therefore one node per graph, and its
/// gradient after `backward()` sums the contributions of every use.
#[derive(Clone, PartialEq)]
pub struct Parameter {
    value: f64,
    name: Option<String>,
    node: Cell<Option<NodeId>>,
}

impl Parameter {
    /// Creates a new Parameter with an optional name.
    pub fn new(value: f64, name: Option<String>) -> Self {
        Parameter {
            value,
            name,
            node: Cell::new(None),
        }
    }

    /// Creates a new Parameter without a name.
    pub fn new_unnamed(value: f64) -> Self {
        Self::new(value, None)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Overwrites the value used by the next [`bind`](Parameter::bind).
    /// Leaves already placed in a graph keep the old value.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Returns this parameter's leaf in `graph`, creating it on first use.
    ///
    /// A value changed with [`set_value`](Parameter::set_value) after the leaf
    /// exists only shows up in the next graph.
    pub fn bind(&self, graph: &mut Graph) -> Result<NodeId, ScalarGradError> {
        if let Some(node) = self.node.get() {
            if node.graph_id() == graph.id() && node.index() < graph.len() {
                return Ok(node);
            }
        }
        let node = graph.leaf(self.value)?;
        self.node.set(Some(node));
        Ok(node)
    }

    /// Returns the leaf of the graph this parameter was last bound into, if any.
    pub fn node(&self) -> Option<NodeId> {
        self.node.get()
    }

    /// Reads the gradient of this parameter's leaf from `graph`, which is the
    /// derivative of the last `backward()` root with respect to the parameter.
    ///
    /// # Errors
    /// * `ParameterNotBound` if the parameter was never bound.
    /// * `ForeignNode` if it was last bound into a different graph.
    pub fn grad(&self, graph: &Graph) -> Result<f64, ScalarGradError> {
        let node = self.node().ok_or_else(|| ScalarGradError::ParameterNotBound {
            name: self.name().unwrap_or("<unnamed>").to_string(),
        })?;
        graph.grad(node)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parameter(name={:?}, value={}, node={:?})",
            self.name,
            self.value,
            self.node.get()
        )
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
