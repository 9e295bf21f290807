use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::Parameter;
use crate::node_data::NodeId;

/// The base trait for all neural network modules (neurons, layers, models).
///
/// A module owns its [`Parameter`]s. `forward` binds them into the graph it is
/// given and builds the module's output nodes from the input nodes, so one
/// graph per forward pass holds the whole computation down to the loss.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph receiving the new nodes.
    /// * `inputs`: Input nodes, which must belong to `graph`.
    ///
    /// # Returns
    /// The output nodes, or a `ScalarGradError` if the inputs do not fit the module.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError>;

    /// Returns all learnable parameters of the module, including those of sub-modules.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Mutable counterpart of [`parameters`](Module::parameters), in the same order.
    fn parameters_mut(&mut self) -> Vec<&mut Parameter>;

    /// Returns the parameters with hierarchical names (e.g. "layer0.neuron1.w2").
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
