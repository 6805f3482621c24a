use scalargrad_core::Value;

// Define modules for optimizers
pub mod sgd;

pub use sgd::SGD;

/// Trait for optimization algorithms.
/// Optimizers update the parameters of a model based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    ///
    /// # Arguments
    /// * `params` - The leaf parameter handles to be updated in place.
    fn step(&mut self, params: &[Value]);

    /// Clears the gradients of all given parameters.
    /// Should be called before the backward pass to avoid accumulating
    /// gradients from multiple iterations.
    fn zero_grad(&self, params: &[Value]) {
        for param in params {
            param.zero_grad();
        }
    }
}
