// scalargrad-core/src/autograd/grad_check.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` maps leaf values to a scalar output; it is evaluated once on a
/// fresh graph to obtain the analytical gradients via `backward()`, then
/// twice per input at `x ± epsilon` to form `(f(x+eps) - f(x-eps)) / 2eps`.
/// The two are compared with an absolute-or-relative tolerance.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let evaluate = |xs: &[f64]| -> Result<(Graph, Vec<Value>, Value), GradCheckError> {
        let graph = Graph::new();
        let leaves = graph.values(xs);
        let output = func(&leaves)?;
        Ok((graph, leaves, output))
    };

    // Analytical gradients from one forward + backward pass.
    let (_graph, leaves, output) = evaluate(inputs)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    for (i, &x) in inputs.iter().enumerate() {
        let analytical_grad = analytical[i];
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let mut plus = inputs.to_vec();
        plus[i] = x + epsilon;
        let loss_plus = evaluate(&plus)?.2.value();

        let mut minus = inputs.to_vec();
        minus[i] = x - epsilon;
        let loss_minus = evaluate(&minus)?.2.value();

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance
            && !relative_eq!(analytical_grad, numerical_grad, max_relative = tolerance)
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: analytical_grad,
                numerical: numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

// --- Tests ---
