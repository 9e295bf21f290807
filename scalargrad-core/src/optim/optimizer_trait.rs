use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::parameter::Parameter;
use crate::node_data::NodeId;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update parameter values from the gradients their bound leaves
/// received in the last `backward()`. They never write to the graph's node
/// values; the new values are picked up by the next forward pass.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Arguments
    /// * `params`: The parameters to update, in a stable order across steps.
    /// * `graph`: The graph the parameters were last bound into.
    ///
    /// # Errors
    /// `ParameterNotBound` if a parameter has no leaf yet, `ForeignNode` if it
    /// was bound into another graph.
    fn step(&mut self, params: &mut [&mut Parameter], graph: &Graph) -> Result<(), ScalarGradError>;

    /// Clears the gradients of every node reachable from `root`.
    fn zero_grad(&mut self, graph: &mut Graph, root: NodeId) -> Result<(), ScalarGradError> {
        graph.zero_grad(root)
    }

    fn learning_rate(&self) -> f64;

    /// Changes the learning rate for subsequent steps.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError>;
}
