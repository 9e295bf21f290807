// src/graph/debug.rs
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;
use crate::utils::to_precision;
use std::fmt;

const DEBUG_PRECISION: usize = 4;

impl Graph {
    /// Returns a multi-line structural dump of the expression rooted at `root`.
    ///
    /// Each node prints `data = {value}; grad = {grad}` (4 significant digits).
    /// A non-leaf then prints its operation label and the dumps of its
    /// dependencies, indented two more spaces. A node reached through several
    /// paths is printed once per path.
    ///
    /// ```text
    /// data = 1.500; grad = 0.000
    /// *
    ///   data = 6.000; grad = 0.000
    ///   data = 0.2500; grad = 0.000
    /// ```
    pub fn debug(&self, root: NodeId) -> Result<String, ScalarGradError> {
        let mut lines = Vec::new();
        // Pre-order walk; dependencies are pushed in reverse to pop in order.
        let mut stack = vec![(root, 0usize)];

        while let Some((node_id, level)) = stack.pop() {
            let node = self.node(node_id)?;
            let indent = " ".repeat(level * 2);
            lines.push(format!(
                "{}data = {}; grad = {}",
                indent,
                to_precision(node.value, DEBUG_PRECISION),
                to_precision(node.grad, DEBUG_PRECISION)
            ));

            let inputs = node.op.inputs();
            if inputs.is_empty() {
                continue;
            }
            lines.push(format!("{}{}", indent, node.op.label()));
            stack.extend(inputs.into_iter().rev().map(|input| (input, level + 1)));
        }

        Ok(lines.join("\n"))
    }

    /// Wraps `root` for use with `{}` formatting.
    ///
    /// Invalid handles render as an error line instead of failing the formatter.
    pub fn display(&self, root: NodeId) -> GraphDisplay<'_> {
        GraphDisplay { graph: self, root }
    }
}

/// `Display` adapter returned by [`Graph::display`].
pub struct GraphDisplay<'a> {
    graph: &'a Graph,
    root: NodeId,
}

impl fmt::Display for GraphDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.debug(self.root) {
            Ok(dump) => f.write_str(&dump),
            Err(e) => write!(f, "<invalid node {}: {}>", self.root, e),
        }
    }
}
