use super::traits::Dataset;
use crate::error::DataError;

/// A simple dataset that wraps a `Vec` of items.
///
/// # Type Parameters
///
/// * `T`: The type of the items stored in the dataset. Items are cloned out
///   by [`get`](Dataset::get).
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    /// Creates a new `VecDataset` from a vector of items.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Iterates over the items in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<I: Clone, U: Clone> VecDataset<(I, U)> {
    /// Zips parallel input and target vectors into `(input, target)` items.
    ///
    /// # Errors
    ///
    /// Returns `DataError::LengthMismatch` if the vectors differ in length.
    pub fn from_pairs(inputs: Vec<I>, targets: Vec<U>) -> Result<Self, DataError> {
        if inputs.len() != targets.len() {
            return Err(DataError::LengthMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }
        Ok(Self::new(inputs.into_iter().zip(targets).collect()))
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(DataError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
