use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ring_net(seed: u64) -> Result<Mlp, ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(seed);
    Mlp::new(2, &[4, 4, 1], &InitStrategy::default(), &mut rng)
}

#[test]
fn test_mlp_shape_and_parameter_count() -> Result<(), ScalarGradError> {
    let mlp = ring_net(0)?;
    assert_eq!(mlp.n_inputs(), 2);
    assert_eq!(mlp.n_outputs(), 1);
    assert_eq!(mlp.sizes(), &[4, 4, 1]);
    // (2+1)*4 + (4+1)*4 + (4+1)*1
    assert_eq!(mlp.num_parameters(), 37);
    assert_eq!(mlp.named_parameters()[0].0, "layer0.neuron0.bias");
    assert_eq!(mlp.named_parameters()[36].0, "layer2.neuron0.w3");
    Ok(())
}

#[test]
fn test_invalid_architectures() {
    let mut rng = StdRng::seed_from_u64(0);
    let strategy = InitStrategy::default();
    assert!(matches!(
        Mlp::new(2, &[], &strategy, &mut rng),
        Err(ScalarGradError::InvalidArchitecture(_))
    ));
    assert!(matches!(
        Mlp::new(2, &[3, 0, 1], &strategy, &mut rng),
        Err(ScalarGradError::InvalidArchitecture(_))
    ));
    assert!(matches!(
        Mlp::new(0, &[1], &strategy, &mut rng),
        Err(ScalarGradError::InvalidArchitecture(_))
    ));
}

#[test]
fn test_same_seed_same_network() -> Result<(), ScalarGradError> {
    let a = ring_net(11)?;
    let b = ring_net(11)?;
    let values_a: Vec<f64> = a.parameters().iter().map(|p| p.value()).collect();
    let values_b: Vec<f64> = b.parameters().iter().map(|p| p.value()).collect();
    assert_eq!(values_a, values_b);
    Ok(())
}

#[test]
fn test_forward_values_output_in_tanh_range() -> Result<(), ScalarGradError> {
    let mlp = ring_net(2)?;
    let mut graph = Graph::new();
    let out = mlp.forward_values(&mut graph, &[0.46, 0.8])?;
    assert_eq!(out.len(), 1);
    let y = graph.value(out[0])?;
    assert!(y > -1.0 && y < 1.0);
    Ok(())
}

#[test]
fn test_forward_binds_every_parameter() -> Result<(), ScalarGradError> {
    let mlp = ring_net(3)?;
    let mut graph = Graph::new();
    let out = mlp.forward_values(&mut graph, &[0.1, -0.2])?;
    graph.backward(out[0])?;
    for param in mlp.parameters() {
        assert!(param.node().is_some());
        assert!(param.grad(&graph)?.is_finite());
    }
    Ok(())
}

#[test]
fn test_forward_wrong_width() -> Result<(), ScalarGradError> {
    let mlp = ring_net(4)?;
    let mut graph = Graph::new();
    assert_eq!(
        mlp.forward_values(&mut graph, &[1.0]),
        Err(ScalarGradError::InputSizeMismatch {
            expected: 2,
            actual: 1,
            operation: "Mlp::forward".to_string(),
        })
    );
    Ok(())
}
