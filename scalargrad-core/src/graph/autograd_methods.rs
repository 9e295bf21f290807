use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Sets `root`'s gradient to `1.0` (the derivative of the root with respect
    /// to itself), then walks the topological order and lets every node push
    /// `local derivative * own gradient` into each of its dependencies. When the
    /// pass ends, every node reachable from `root` holds d(root)/d(node).
    ///
    /// Gradients accumulate with `+=`. Calling `backward` twice without a
    /// [`zero_grad`](Graph::zero_grad) in between adds the second pass on top of
    /// the first for every node except `root`, which is reseeded to `1.0`.
    ///
    /// # Errors
    /// Returns `NodeNotFound`/`ForeignNode` for an invalid handle and
    /// `CycleDetected` if the reachable graph is not acyclic.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        let sorted_nodes = topological_sort(self, root)?;
        log::debug!(
            "backward() from {} over {} nodes",
            root,
            sorted_nodes.len()
        );

        self.node_mut(root)?.grad = 1.0;

        for node_id in sorted_nodes {
            let node = self.node(node_id)?;
            let input_values = node
                .op
                .inputs()
                .into_iter()
                .map(|input| self.value(input))
                .collect::<Result<Vec<f64>, ScalarGradError>>()?;
            let contributions = node.op.backward(node.grad, node.value, &input_values)?;

            for (input, delta) in contributions {
                self.node_mut(input)?.grad += delta;
            }
        }

        Ok(())
    }

    /// Resets to `0.0` the gradient of `root` and of every node reachable from it.
    ///
    /// Shared nodes are visited once. Nodes outside `root`'s graph keep their
    /// gradients.
    pub fn zero_grad(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        self.node(root)?;
        let mut visited = vec![false; self.len()];
        let mut stack = vec![root];

        while let Some(node_id) = stack.pop() {
            let node = self.node_mut(node_id)?;
            if visited[node_id.index()] {
                continue;
            }
            visited[node_id.index()] = true;
            node.grad = 0.0;
            stack.extend(node.op.inputs());
        }
        log::trace!("zero_grad() from {}", root);
        Ok(())
    }

    /// Resets the gradient of every node in the arena.
    pub fn zero_grad_all(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = 0.0;
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
