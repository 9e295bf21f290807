use std::fmt::Debug;

/// Defines the order in which a training loop visits the indices of a dataset.
pub trait Sampler: Debug {
    /// Returns an iterator over the indices of a dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Returns the number of indices [`iter`](Sampler::iter) yields.
    fn len(&self, dataset_len: usize) -> usize;
}
