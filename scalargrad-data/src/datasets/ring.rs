use super::vec_dataset::VecDataset;

/// Points inside the ring, labelled `1.0`.
const INNER: [[f64; 2]; 8] = [
    [0.0, 0.0],
    [0.74, 0.0],
    [0.46, 0.8],
    [0.48, -0.6],
    [-0.33, 0.7],
    [-0.42, -0.2],
    [-0.89, -0.1],
    [-0.23, -0.78],
];

/// Points on the outer ring, labelled `0.0`.
const OUTER: [[f64; 2]; 13] = [
    [0.0, 1.0],
    [0.62, 1.3],
    [1.3, 0.45],
    [1.34, 0.0],
    [1.78, -0.7],
    [1.1, -0.8],
    [0.3, -1.78],
    [0.1, -1.5],
    [-0.63, -1.3],
    [-1.37, -1.01],
    [-1.94, 0.0],
    [-1.38, 0.38],
    [-0.3, 1.29],
];

/// A 21-point two-class problem in the plane: a cluster around the origin
/// (target `1.0`) enclosed by a ring of points (target `0.0`).
///
/// The classes are not linearly separable. Inner points come first.
pub fn ring_dataset() -> VecDataset<([f64; 2], f64)> {
    let inner = INNER.iter().map(|&p| (p, 1.0));
    let outer = OUTER.iter().map(|&p| (p, 0.0));
    VecDataset::new(inner.chain(outer).collect())
}
