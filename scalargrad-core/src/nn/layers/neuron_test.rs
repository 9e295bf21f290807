use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_creation() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(1);
    let neuron = Neuron::new(3, &InitStrategy::default(), &mut rng)?;
    assert_eq!(neuron.n_inputs(), 3);
    assert_eq!(neuron.parameters().len(), 4);
    for p in neuron.parameters() {
        assert!(p.value() >= -1.0 && p.value() < 1.0);
    }
    Ok(())
}

#[test]
fn test_zero_inputs_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        Neuron::new(0, &InitStrategy::default(), &mut rng),
        Err(ScalarGradError::InvalidArchitecture(_))
    ));
}

#[test]
fn test_forward_value() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(0.5, vec![1.0, -2.0])?;
    let mut graph = Graph::new();
    let x0 = graph.leaf(0.3)?;
    let x1 = graph.leaf(0.1)?;
    let out = neuron.forward(&mut graph, &[x0, x1])?;
    assert_eq!(out.len(), 1);
    // 0.5 + 0.3 * 1.0 + 0.1 * -2.0 = 0.6
    assert_relative_eq!(graph.value(out[0])?, 0.6f64.tanh(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_reaches_parameters() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(0.5, vec![1.0, -2.0])?;
    let mut graph = Graph::new();
    let x0 = graph.leaf(0.3)?;
    let x1 = graph.leaf(0.1)?;
    let out = neuron.activate(&mut graph, &[x0, x1])?;
    graph.backward(out)?;

    let dtanh = 1.0 - 0.6f64.tanh().powi(2);
    assert_relative_eq!(neuron.bias().grad(&graph)?, dtanh, epsilon = 1e-9);
    assert_relative_eq!(neuron.weights()[0].grad(&graph)?, 0.3 * dtanh, epsilon = 1e-9);
    assert_relative_eq!(neuron.weights()[1].grad(&graph)?, 0.1 * dtanh, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(x0)?, 1.0 * dtanh, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(x1)?, -2.0 * dtanh, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_sum_starts_from_bias() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(0.0, vec![1.0])?;
    let mut graph = Graph::new();
    let x = graph.leaf(2.0)?;
    neuron.activate(&mut graph, &[x])?;
    // x, bias, w, x*w, bias+x*w: the first node after the input is the bias.
    let bias_node = neuron.bias().node().ok_or(ScalarGradError::ParameterNotBound {
        name: "bias".to_string(),
    })?;
    assert_eq!(bias_node.index(), 1);
    let sum_node = NodeId::new(graph.id(), 4);
    assert_eq!(graph.label(sum_node)?, "+");
    assert_eq!(graph.dependencies(sum_node)?[0], bias_node);
    Ok(())
}

#[test]
fn test_input_size_mismatch() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(0.0, vec![1.0, 1.0])?;
    let mut graph = Graph::new();
    let x = graph.leaf(1.0)?;
    assert_eq!(
        neuron.forward(&mut graph, &[x]),
        Err(ScalarGradError::InputSizeMismatch {
            expected: 2,
            actual: 1,
            operation: "Neuron::forward".to_string(),
        })
    );
    Ok(())
}

#[test]
fn test_named_parameters_order() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(0.1, vec![0.2, 0.3])?;
    let names: Vec<String> = neuron
        .named_parameters()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["bias", "w0", "w1"]);
    Ok(())
}

#[test]
fn test_parameters_shared_across_samples() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(0.0, vec![0.5])?;
    let mut graph = Graph::new();
    let x1 = graph.leaf(1.0)?;
    let x2 = graph.leaf(-2.0)?;
    let y1 = neuron.activate(&mut graph, &[x1])?;
    let y2 = neuron.activate(&mut graph, &[x2])?;
    let loss = graph.plus(y1, y2)?;
    graph.backward(loss)?;

    let dtanh = |z: f64| 1.0 - z.tanh().powi(2);
    // Pre-activations are 0.5 and -1.0.
    let expected_w = dtanh(0.5) * 1.0 + dtanh(-1.0) * -2.0;
    let expected_bias = dtanh(0.5) + dtanh(-1.0);
    assert_relative_eq!(neuron.weights()[0].grad(&graph)?, expected_w, epsilon = 1e-9);
    assert_relative_eq!(neuron.bias().grad(&graph)?, expected_bias, epsilon = 1e-9);
    Ok(())
}
