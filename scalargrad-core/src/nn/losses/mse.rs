// src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: 'sum' | 'mean'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between prediction nodes and target values.
///
/// Builds `sum_i (target_i - prediction_i)^2` in the graph, accumulating
/// from a `0` leaf, and divides by the sample count under [`Reduction::Mean`].
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node.
    ///
    /// # Arguments
    /// * `graph`: The graph holding `predictions`; targets are added as leaves.
    /// * `predictions`: One node per sample.
    /// * `targets`: One expected value per sample.
    ///
    /// # Errors
    /// * `InputSizeMismatch` if the two slices differ in length.
    /// * `EmptyInput` if there are no samples.
    pub fn calculate(
        &self,
        graph: &mut Graph,
        predictions: &[NodeId],
        targets: &[f64],
    ) -> Result<NodeId, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyInput {
                operation: "MSELoss::calculate".to_string(),
            });
        }

        let mut total = graph.leaf(0.0)?;
        for (&prediction, &target) in predictions.iter().zip(targets) {
            let target = graph.leaf(target)?;
            let diff = graph.minus(target, prediction)?;
            let squared = graph.pow(diff, 2.0)?;
            total = graph.plus(total, squared)?;
        }

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let n = graph.leaf(predictions.len() as f64)?;
                graph.div(total, n)
            }
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
