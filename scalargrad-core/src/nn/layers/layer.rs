// scalargrad-core/src/nn/layers/layer.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A fully-connected layer of `nout` parallel neurons over `nin` inputs.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nout: usize,
        nonlin: bool,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, nin, nonlin, rng))
            .collect();
        Layer { neurons }
    }

    /// Applies every neuron to the same inputs, producing `nout` outputs.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_shapes_and_parameters() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(1);
        let layer = Layer::new(&graph, 3, 4, true, &mut rng);
        assert_eq!(layer.nout(), 4);
        // 4 neurons x (3 weights + 1 bias)
        assert_eq!(layer.parameters().len(), 16);

        let inputs = graph.values(&[0.1, -0.2, 0.3]);
        let outputs = layer.forward(&inputs).unwrap();
        assert_eq!(outputs.len(), 4);
        // tanh keeps outputs in (-1, 1)
        for out in &outputs {
            assert!(out.value().abs() < 1.0);
        }
    }

    #[test]
    fn test_layer_forward_propagates_length_errors() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(1);
        let layer = Layer::new(&graph, 3, 2, true, &mut rng);
        let inputs = graph.values(&[1.0]);
        assert!(layer.forward(&inputs).is_err());
    }
}
