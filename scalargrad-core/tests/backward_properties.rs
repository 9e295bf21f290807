use approx::assert_relative_eq;
use scalargrad_core::{Graph, ScalarGradError};

mod common;
use common::{grads, init_logger, leaves};

#[test]
fn test_two_leaf_closed_form() -> Result<(), ScalarGradError> {
    init_logger();
    // f(a, b) = a*b + a: df/da = b + 1, df/db = a
    for &(a, b) in &[(2.0, 3.0), (-1.5, 0.25), (0.0, -4.0)] {
        let mut graph = Graph::new();
        let x = leaves(&mut graph, &[a, b])?;
        let ab = graph.times(x[0], x[1])?;
        let f = graph.plus(ab, x[0])?;
        graph.backward(f)?;
        assert_relative_eq!(graph.grad(x[0])?, b + 1.0, epsilon = 1e-9);
        assert_relative_eq!(graph.grad(x[1])?, a, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_quotient_and_difference_closed_form() -> Result<(), ScalarGradError> {
    // f(a, b) = (a - b) / b: df/da = 1/b, df/db = -a/b^2
    let (a, b) = (5.0, 2.0);
    let mut graph = Graph::new();
    let x = leaves(&mut graph, &[a, b])?;
    let diff = graph.minus(x[0], x[1])?;
    let f = graph.div(diff, x[1])?;
    graph.backward(f)?;
    assert_relative_eq!(graph.value(f)?, 1.5, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(x[0])?, 0.5, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(x[1])?, -a / (b * b), epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_zero_grad_then_backward_matches_fresh_graph() -> Result<(), ScalarGradError> {
    let build = |graph: &mut Graph| -> Result<_, ScalarGradError> {
        let x = leaves(graph, &[0.7, -1.2])?;
        let p = graph.times(x[0], x[1])?;
        let e = graph.exp(p)?;
        let t = graph.tanh(x[0])?;
        let root = graph.plus(e, t)?;
        Ok((x, root))
    };

    let mut fresh = Graph::new();
    let (fresh_leaves, fresh_root) = build(&mut fresh)?;
    fresh.backward(fresh_root)?;
    let expected = grads(&fresh, &fresh_leaves)?;

    let mut reused = Graph::new();
    let (reused_leaves, reused_root) = build(&mut reused)?;
    reused.backward(reused_root)?;
    reused.backward(reused_root)?;
    reused.zero_grad(reused_root)?;
    reused.backward(reused_root)?;
    assert_eq!(grads(&reused, &reused_leaves)?, expected);
    Ok(())
}

#[test]
fn test_second_backward_accumulates() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let x = leaves(&mut graph, &[2.0, 3.0])?;
    let f = graph.times(x[0], x[1])?;
    graph.backward(f)?;
    let first = grads(&graph, &x)?;
    graph.backward(f)?;
    let second = grads(&graph, &x)?;
    assert_eq!(second, vec![2.0 * first[0], 2.0 * first[1]]);
    // The root is reseeded, not accumulated.
    assert_eq!(graph.grad(f)?, 1.0);
    Ok(())
}

#[test]
fn test_operand_used_twice() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(-3.5)?;
    let square = graph.times(x, x)?;
    graph.backward(square)?;
    assert_eq!(graph.grad(x)?, -7.0);

    let mut graph = Graph::new();
    let x = graph.leaf(4.0)?;
    let double = graph.plus(x, x)?;
    graph.backward(double)?;
    assert_eq!(graph.grad(x)?, 2.0);
    Ok(())
}

#[test]
fn test_tanh_at_zero() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(0.0)?;
    let t = graph.tanh(x)?;
    graph.backward(t)?;
    assert_relative_eq!(graph.value(t)?, 0.0, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(x)?, 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_exp_of_quotient_scenario() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let two = graph.leaf(2.0)?;
    let three = graph.leaf(3.0)?;
    let four = graph.leaf(4.0)?;
    let product = graph.times(two, three)?;
    let quotient = graph.div(product, four)?;
    let result = graph.exp(quotient)?;
    graph.backward(result)?;

    let e15 = 1.5f64.exp();
    assert_relative_eq!(graph.value(result)?, e15, epsilon = 1e-12);
    assert_relative_eq!(graph.value(result)?, 4.4817, epsilon = 1e-4);
    assert_relative_eq!(graph.grad(two)?, e15 * 0.75, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(two)?, 3.3613, epsilon = 1e-4);
    assert_relative_eq!(graph.grad(three)?, e15 * 0.5, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(three)?, 2.2408, epsilon = 1e-4);
    assert_relative_eq!(graph.grad(four)?, -e15 * 6.0 / 16.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_handles_from_another_graph_rejected() -> Result<(), ScalarGradError> {
    let mut a = Graph::new();
    let mut b = Graph::new();
    let x = a.leaf(1.0)?;
    let y = b.leaf(2.0)?;
    assert!(matches!(
        a.times(x, y),
        Err(ScalarGradError::ForeignNode { .. })
    ));
    assert!(matches!(
        b.backward(x),
        Err(ScalarGradError::ForeignNode { .. })
    ));
    Ok(())
}

#[test]
fn test_non_finite_leaf_rejected() {
    let mut graph = Graph::new();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            graph.leaf(value),
            Err(ScalarGradError::NonFiniteValue { .. })
        ));
    }
    assert!(graph.is_empty());
}
