pub mod ring;
pub mod traits;
pub mod vec_dataset;

pub use ring::ring_dataset;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
