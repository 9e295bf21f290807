use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::node_data::NodeId;

/// Chains modules, feeding each one's outputs to the next.
#[derive(Debug, Default)]
pub struct Sequential {
    modules: Vec<(String, Box<dyn Module>)>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential {
            modules: Vec::new(),
        }
    }

    pub fn add_module(&mut self, name: &str, module: Box<dyn Module>) {
        self.modules.push((name.to_string(), module));
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules_list(&self) -> impl Iterator<Item = &dyn Module> {
        self.modules.iter().map(|(_, m)| m.as_ref())
    }
}

impl Module for Sequential {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for (_, module) in &self.modules {
            current = module.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.modules
            .iter()
            .flat_map(|(_, m)| m.parameters())
            .collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.modules
            .iter_mut()
            .flat_map(|(_, m)| m.parameters_mut())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (name, module) in &self.modules {
            for (param_name, param) in module.named_parameters() {
                params.push((format!("{}.{}", name, param_name), param));
            }
        }
        params
    }
}
