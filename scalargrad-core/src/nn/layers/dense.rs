use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::InitStrategy;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::node_data::NodeId;
use rand::Rng;

/// A fully connected layer: `n_outputs` independent [`Neuron`]s reading the
/// same `n_inputs` nodes.
#[derive(Debug, Clone)]
pub struct Dense {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Dense {
    /// Creates a new Dense layer.
    ///
    /// # Arguments
    /// * `in_features` - Number of input nodes each neuron reads.
    /// * `out_features` - Number of neurons (and output nodes).
    /// * `strategy` - Distribution of the starting weights and biases.
    /// * `rng` - Source of randomness; neurons are initialised in order.
    ///
    /// # Errors
    /// `InvalidArchitecture` if either width is zero.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        strategy: &InitStrategy,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if in_features == 0 || out_features == 0 {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "dense layer widths must be positive, got {} -> {}",
                in_features, out_features
            )));
        }
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, strategy, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dense {
            neurons,
            in_features,
        })
    }

    /// Builds a layer from existing neurons, which must all read the same
    /// number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let in_features = match neurons.first() {
            Some(first) => first.n_inputs(),
            None => {
                return Err(ScalarGradError::InvalidArchitecture(
                    "dense layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.n_inputs() != in_features) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "neurons disagree on input width: {} vs {}",
                in_features,
                odd.n_inputs()
            )));
        }
        Ok(Dense {
            neurons,
            in_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Dense {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        if inputs.len() != self.in_features {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.in_features,
                actual: inputs.len(),
                operation: "Dense::forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.neurons
            .iter_mut()
            .flat_map(|n| n.parameters_mut())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (param_name, param) in neuron.named_parameters() {
                params.push((format!("neuron{}.{}", i, param_name), param));
            }
        }
        params
    }
}
