use thiserror::Error;

/// Errors raised by datasets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Index {index} is out of bounds for a dataset of {len} samples")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Got {inputs} inputs but {targets} targets")]
    LengthMismatch { inputs: usize, targets: usize },
}
