use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use approx::assert_relative_eq;

#[test]
fn test_tanh_at_zero() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(0.0)?;
    let y = tanh_op(&mut graph, x)?;
    graph.backward(y)?;
    assert_relative_eq!(graph.value(y)?, 0.0, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(x)?, 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_tanh_matches_std() -> Result<(), ScalarGradError> {
    for &input in &[-2.0, -0.5, 0.3, 1.7] {
        let mut graph = Graph::new();
        let x = graph.leaf(input)?;
        let y = tanh_op(&mut graph, x)?;
        graph.backward(y)?;
        let expected = f64::tanh(input);
        assert_relative_eq!(graph.value(y)?, expected, epsilon = 1e-12);
        assert_relative_eq!(graph.grad(x)?, 1.0 - expected * expected, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_tanh_graph_structure() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(0.5)?;
    let y = tanh_op(&mut graph, x)?;
    // x, 2, x*2, exp, 1, -1, e-1, 1, e+1, ^-1, quotient
    assert_eq!(graph.len(), 11);
    assert_eq!(graph.label(y)?, "*");
    let deps = graph.dependencies(y)?;
    assert_eq!(graph.label(deps[0])?, "+");
    assert_eq!(graph.label(deps[1])?, "^-1");
    Ok(())
}

#[test]
fn test_tanh_grad_check() -> Result<(), GradCheckError> {
    check_grad(|g, x| tanh_op(g, x[0]), &[0.8], 1e-6, 1e-6)
}
