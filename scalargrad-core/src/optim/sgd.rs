use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Plain SGD applies `value -= lr * grad`. With momentum `m > 0` each
/// parameter keeps a velocity `v = m * v + grad` and applies `value -= lr * v`.
#[derive(Debug, Clone)]
pub struct Sgd {
    lr: f64,
    momentum: f64,
    velocities: Vec<f64>,
}

fn validate_lr(lr: f64) -> Result<(), ScalarGradError> {
    if !lr.is_finite() || lr <= 0.0 {
        return Err(ScalarGradError::InvalidLearningRate(lr));
    }
    Ok(())
}

impl Sgd {
    /// Creates plain SGD.
    ///
    /// # Errors
    /// `InvalidLearningRate` unless `lr` is finite and positive.
    pub fn new(lr: f64) -> Result<Self, ScalarGradError> {
        Self::with_momentum(lr, 0.0)
    }

    /// Creates SGD with a momentum factor in `[0, 1)`.
    pub fn with_momentum(lr: f64, momentum: f64) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        if !(0.0..1.0).contains(&momentum) {
            return Err(ScalarGradError::UnsupportedOperation(format!(
                "SGD momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        Ok(Sgd {
            lr,
            momentum,
            velocities: Vec::new(),
        })
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, params: &mut [&mut Parameter], graph: &Graph) -> Result<(), ScalarGradError> {
        // Read every gradient first so a bad parameter leaves all values untouched.
        let grads = params
            .iter()
            .map(|p| p.grad(graph))
            .collect::<Result<Vec<_>, _>>()?;

        if self.momentum > 0.0 {
            if self.velocities.is_empty() {
                self.velocities = vec![0.0; params.len()];
            } else if self.velocities.len() != params.len() {
                return Err(ScalarGradError::InputSizeMismatch {
                    expected: self.velocities.len(),
                    actual: params.len(),
                    operation: "Sgd::step".to_string(),
                });
            }
        }

        for (i, (param, grad)) in params.iter_mut().zip(grads).enumerate() {
            let update = if self.momentum > 0.0 {
                let v = self.momentum * self.velocities[i] + grad;
                self.velocities[i] = v;
                v
            } else {
                grad
            };
            let new_value = param.value() - self.lr * update;
            log::trace!(
                "SGD step param {} ({:?}): {} -> {} (grad {})",
                i,
                param.name(),
                param.value(),
                new_value,
                grad
            );
            param.set_value(new_value);
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
