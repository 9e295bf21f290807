pub mod format;
#[cfg(test)]
pub mod testing;

pub use format::to_precision;
