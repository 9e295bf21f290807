use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Node index {index} is out of bounds for a graph of {len} nodes")]
    NodeNotFound { index: usize, len: usize },

    #[error("Node handle belongs to graph {actual}, but was used with graph {expected}")]
    ForeignNode { expected: usize, actual: usize },

    #[error("Cycle detected in the computation graph at node {index}.")]
    CycleDetected { index: usize },

    #[error("Non-finite value {value} passed to operation {operation}")]
    NonFiniteValue { value: f64, operation: String },

    #[error("Invalid learning rate {0}: expected a finite positive number")]
    InvalidLearningRate(f64),

    #[error("Parameter '{name}' has not been bound to a graph")]
    ParameterNotBound { name: String },

    #[error("Input size mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} received no input")]
    EmptyInput { operation: String },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid initialization: {0}")]
    InvalidInitialization(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
