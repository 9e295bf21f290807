use crate::graph::Graph;
use crate::node_data::NodeId;

/// Checks that the gradients of `nodes` match `expected_grads` within `tolerance`.
/// Panics with the offending position otherwise.
pub fn check_grads_near(graph: &Graph, nodes: &[NodeId], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(
        nodes.len(),
        expected_grads.len(),
        "Node/expected length mismatch"
    );

    for (i, (&node, &expected)) in nodes.iter().zip(expected_grads.iter()).enumerate() {
        let actual = graph
            .grad(node)
            .expect("Failed to read gradient in check_grads_near");
        let diff = (actual - expected).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, expected, diff, tolerance
            );
        }
    }
}

/// Builds a graph holding one leaf per value.
pub(crate) fn graph_with_leaves(values: &[f64]) -> (Graph, Vec<NodeId>) {
    let mut graph = Graph::new();
    let leaves = values
        .iter()
        .map(|&v| graph.leaf(v).expect("Failed to create test leaf"))
        .collect();
    (graph, leaves)
}
