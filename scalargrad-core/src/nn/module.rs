use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module exposes its learnable leaf nodes through [`Module::parameters`];
/// an external training loop reads their gradients after `backward()` and
/// mutates their values for the update step.
pub trait Module {
    /// Returns every learnable parameter (weight and bias leaf node) of the
    /// module, including those of sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to zero. Call before each
    /// backward pass; gradients otherwise accumulate across iterations.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}
