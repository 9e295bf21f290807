//! # Activation Functions
//!
//! Non-linear activations for the `nn` layers. They are composed from the
//! primitive operations, so they add nodes to the graph but no backward rule.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.

pub mod tanh;

// Re-export key functions
pub use tanh::tanh_op;
