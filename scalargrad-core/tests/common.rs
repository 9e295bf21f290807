use scalargrad_core::{Graph, NodeId, ScalarGradError};

/// Installs `env_logger` once per test binary; `RUST_LOG` picks the level.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates one leaf per value.
#[allow(dead_code)]
pub fn leaves(graph: &mut Graph, values: &[f64]) -> Result<Vec<NodeId>, ScalarGradError> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Reads the gradient of every node in `nodes`.
#[allow(dead_code)]
pub fn grads(graph: &Graph, nodes: &[NodeId]) -> Result<Vec<f64>, ScalarGradError> {
    nodes.iter().map(|&n| graph.grad(n)).collect()
}
