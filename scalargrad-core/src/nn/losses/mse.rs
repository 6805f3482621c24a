// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::value::Value;

/// Specifies the reduction to apply to the per-sample squared errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

/// Squared-error loss between predicted values and plain-number targets.
///
/// Targets are constants, not differentiable nodes: gradient flows into the
/// predictions only.
#[derive(Debug, Clone)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    /// Computes `reduce((prediction_i - target_i)^2)`.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::LengthMismatch`] if the slices differ in
    /// length and [`ScalarGradError::EmptyInput`] if they are empty.
    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[f64],
    ) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::LengthMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyInput {
                operation: "MSELoss::calculate".to_string(),
            });
        }

        let mut total = (&predictions[0] - targets[0]).powf(2.0);
        for (prediction, &target) in predictions.iter().zip(targets).skip(1) {
            total = total + (prediction - target).powf(2.0);
        }

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / predictions.len() as f64,
        })
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
