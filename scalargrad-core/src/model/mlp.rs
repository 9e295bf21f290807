use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::model::sequential::Sequential;
use crate::nn::init::InitStrategy;
use crate::nn::layers::Dense;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::node_data::NodeId;
use rand::Rng;

/// A multi-layer perceptron of tanh [`Dense`] layers.
///
/// `Mlp::new(2, &[4, 4, 1], ..)` builds the 2-4-4-1 network: layer `i` reads
/// the outputs of layer `i - 1` (the network inputs for `i = 0`).
#[derive(Debug)]
pub struct Mlp {
    layers: Sequential,
    n_inputs: usize,
    sizes: Vec<usize>,
}

impl Mlp {
    /// Creates a network with `n_inputs` inputs and one layer per entry of
    /// `sizes`, initialising layers front to back from `rng`.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `sizes` is empty or any width (inputs
    /// included) is zero.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        sizes: &[usize],
        strategy: &InitStrategy,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if sizes.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        strategy.validate()?;

        let mut layers = Sequential::new();
        let mut fan_in = n_inputs;
        for (i, &width) in sizes.iter().enumerate() {
            let layer = Dense::new(fan_in, width, strategy, rng)?;
            layers.add_module(&format!("layer{}", i), Box::new(layer));
            fan_in = width;
        }
        log::debug!(
            "Built MLP {}-{:?} with {} parameters",
            n_inputs,
            sizes,
            layers.num_parameters()
        );

        Ok(Mlp {
            layers,
            n_inputs,
            sizes: sizes.to_vec(),
        })
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.sizes.last().copied().unwrap_or(0)
    }

    /// Layer widths, excluding the input width.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Wraps raw inputs as leaves and runs the forward pass.
    pub fn forward_values(
        &self,
        graph: &mut Graph,
        inputs: &[f64],
    ) -> Result<Vec<NodeId>, ScalarGradError> {
        self.check_width(inputs.len())?;
        let leaves = inputs
            .iter()
            .map(|&x| graph.leaf(x))
            .collect::<Result<Vec<_>, _>>()?;
        self.layers.forward(graph, &leaves)
    }

    fn check_width(&self, actual: usize) -> Result<(), ScalarGradError> {
        if actual != self.n_inputs {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.n_inputs,
                actual,
                operation: "Mlp::forward".to_string(),
            });
        }
        Ok(())
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        self.check_width(inputs.len())?;
        self.layers.forward(graph, inputs)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.parameters()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.layers.parameters_mut()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.layers.named_parameters()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
