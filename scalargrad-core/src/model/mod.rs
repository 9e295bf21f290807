// src/model/mod.rs

pub mod mlp;
pub mod sequential;

pub use mlp::Mlp;
pub use sequential::Sequential;
