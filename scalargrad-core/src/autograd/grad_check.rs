use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("Graph error during gradient check: {0}")]
    Graph(#[from] ScalarGradError),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds an expression from the leaves it is handed (one per entry of
/// `inputs`, same order) and returns its output node. The expression is built
/// once to run `backward()`, then twice more per input with that input shifted
/// by `+epsilon` and `-epsilon`:
///
/// `numerical = (f(x + eps) - f(x - eps)) / (2 * eps)`
///
/// A gradient fails when both the absolute difference and the difference
/// relative to the analytical value exceed `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let mut graph = Graph::new();
    let leaves = inputs
        .iter()
        .map(|&x| graph.leaf(x))
        .collect::<Result<Vec<_>, _>>()?;
    let output = func(&mut graph, &leaves)?;
    graph.backward(output)?;
    let analytical_grads = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf))
        .collect::<Result<Vec<_>, _>>()?;

    // --- 2. Numerical gradients, one input at a time ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate_shifted(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate_shifted(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
        log::trace!(
            "check_grad input {}: analytical {} numerical {}",
            i,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}

/// Rebuilds the expression in a fresh graph with input `index` shifted by `delta`.
fn evaluate_shifted<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, ScalarGradError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::new();
    let leaves = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| graph.leaf(if j == index { x + delta } else { x }))
        .collect::<Result<Vec<_>, _>>()?;
    let output = func(&mut graph, &leaves)?;
    graph.value(output)
}
