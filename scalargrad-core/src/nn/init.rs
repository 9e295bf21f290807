use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// How fresh parameters draw their starting values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitStrategy {
    /// Uniform over the half-open interval `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
}

impl Default for InitStrategy {
    fn default() -> Self {
        InitStrategy::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl InitStrategy {
    /// Checks the strategy's bounds without drawing anything.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            InitStrategy::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(ScalarGradError::InvalidInitialization(format!(
                        "uniform bounds must be finite with low < high, got [{}, {})",
                        low, high
                    )));
                }
            }
            InitStrategy::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(ScalarGradError::InvalidInitialization(format!(
                        "normal needs a finite mean and a finite non-negative std, got mean={} std={}",
                        mean, std
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws one value.
    ///
    /// # Errors
    /// `InvalidInitialization` if the bounds are unusable (see [`validate`](Self::validate)).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ScalarGradError> {
        self.validate()?;
        match *self {
            InitStrategy::Uniform { low, high } => Ok(rng.gen_range(low..high)),
            InitStrategy::Normal { mean, std } => {
                let normal = Normal::new(mean, std).map_err(|e| {
                    ScalarGradError::InvalidInitialization(format!("normal distribution: {}", e))
                })?;
                Ok(normal.sample(rng))
            }
        }
    }
}

/// Overwrites every parameter in `params` with a fresh draw from `strategy`.
///
/// Bound graph leaves are not touched; the new values take effect on the next
/// forward pass.
pub fn init_parameters<R: Rng + ?Sized>(
    params: &mut [&mut Parameter],
    strategy: &InitStrategy,
    rng: &mut R,
) -> Result<(), ScalarGradError> {
    strategy.validate()?;
    for param in params.iter_mut() {
        let value = strategy.sample(rng)?;
        param.set_value(value);
    }
    Ok(())
}

/// Sets every parameter in `params` to zero.
pub fn zeros_(params: &mut [&mut Parameter]) {
    for param in params.iter_mut() {
        param.set_value(0.0);
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
