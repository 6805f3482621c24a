// scalargrad-core/src/nn/layers/neuron.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single neuron: weighted sum of inputs plus bias, through an optional
/// tanh activation.
///
/// Weights are drawn from `U(-1, 1)`, the bias starts at zero. All parameters
/// are leaf nodes on the given graph.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlin: bool,
}

impl Neuron {
    /// Creates a neuron taking `nin` inputs.
    ///
    /// # Arguments
    /// * `graph`: The arena the parameters are recorded on.
    /// * `nin`: Number of inputs (and weights).
    /// * `nonlin`: If `true`, the output passes through tanh.
    /// * `rng`: Random source for weight initialization.
    pub fn new<R: Rng + ?Sized>(graph: &Graph, nin: usize, nonlin: bool, rng: &mut R) -> Self {
        let weights = (0..nin)
            .map(|_| graph.value(init::uniform(rng, -1.0, 1.0)))
            .collect();
        let bias = graph.value(0.0);
        Neuron {
            weights,
            bias,
            nonlin,
        }
    }

    /// Computes `activation(sum(w_i * x_i) + b)`.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::LengthMismatch`] if `inputs` does not match
    /// the number of weights.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::LengthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let mut act = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            act = act + w * x;
        }
        Ok(if self.nonlin { act.tanh() } else { act })
    }

    /// Number of inputs this neuron accepts.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

// --- Tests ---
