use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::InitStrategy;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::node_data::NodeId;
use rand::Rng;

/// A single tanh unit: `tanh(bias + sum_i(x_i * w_i))`.
#[derive(Debug, Clone)]
pub struct Neuron {
    bias: Parameter,
    weights: Vec<Parameter>,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights, drawing the weights and then
    /// the bias from `strategy`.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `n_inputs` is zero, `InvalidInitialization`
    /// if the strategy cannot be sampled.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        strategy: &InitStrategy,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if n_inputs == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights = (0..n_inputs)
            .map(|_| strategy.sample(rng))
            .collect::<Result<Vec<_>, _>>()?;
        let bias = strategy.sample(rng)?;
        Self::from_values(bias, weights)
    }

    /// Creates a neuron with explicit starting values.
    pub fn from_values(bias: f64, weights: Vec<f64>) -> Result<Self, ScalarGradError> {
        if weights.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        Ok(Neuron {
            bias: Parameter::new(bias, Some("bias".to_string())),
            weights: weights
                .into_iter()
                .enumerate()
                .map(|(i, w)| Parameter::new(w, Some(format!("w{}", i))))
                .collect(),
        })
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    /// Builds the unit's output node.
    pub fn activate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        // --- Weighted sum, accumulated onto the bias ---
        let mut sum = self.bias.bind(graph)?;
        for (&x, w) in inputs.iter().zip(&self.weights) {
            let w_node = w.bind(graph)?;
            let product = graph.times(x, w_node)?;
            sum = graph.plus(sum, product)?;
        }

        graph.tanh(sum)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    /// Bias first, then the weights in input order.
    fn parameters(&self) -> Vec<&Parameter> {
        std::iter::once(&self.bias).chain(self.weights.iter()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        std::iter::once(&mut self.bias)
            .chain(self.weights.iter_mut())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or_default().to_string(), p))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
