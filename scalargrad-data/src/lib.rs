//! # scalargrad-data
//!
//! Small in-memory datasets and index samplers for feeding training loops
//! built on `scalargrad-core`.

pub mod datasets;
pub mod error;
pub mod samplers;

pub use datasets::{ring_dataset, Dataset, VecDataset};
pub use error::DataError;
pub use samplers::{Sampler, SequentialSampler};
