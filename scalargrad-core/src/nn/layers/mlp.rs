// scalargrad-core/src/nn/layers/mlp.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// Multi-layer perceptron: a stack of fully-connected layers.
///
/// Hidden layers use the tanh nonlinearity; the final layer is linear.
#[derive(Debug)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Builds an MLP taking `nin` inputs, with one layer per entry of
    /// `nouts` (e.g. `nin = 3, nouts = [4, 4, 1]`).
    ///
    /// # Errors
    /// Returns [`ScalarGradError::EmptyArchitecture`] if `nouts` is empty.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::EmptyArchitecture);
        }

        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);

        let last = nouts.len() - 1;
        let layers = (0..nouts.len())
            .map(|i| Layer::new(graph, sizes[i], sizes[i + 1], i != last, rng))
            .collect();
        Ok(MLP { layers })
    }

    /// Runs the inputs through every layer in order.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }
}

impl Module for MLP {
    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::losses::{MSELoss, Reduction};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mlp_rejects_empty_architecture() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(2);
        let err = MLP::new(&graph, 3, &[], &mut rng).unwrap_err();
        assert_eq!(err, ScalarGradError::EmptyArchitecture);
    }

    #[test]
    fn test_mlp_shapes_and_parameter_count() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(2);
        let net = MLP::new(&graph, 3, &[4, 4, 1], &mut rng).unwrap();
        // 4*(3+1) + 4*(4+1) + 1*(4+1) = 16 + 20 + 5
        assert_eq!(net.parameters().len(), 41);

        let inputs = graph.values(&[2.0, 3.0, -1.0]);
        let outputs = net.forward(&inputs).unwrap();
        assert_eq!(outputs.len(), 1);
    }

    #[test]
    fn test_mlp_trains_on_tiny_dataset() {
        // Four samples, targets in {-1, 1}; 50 steps of plain gradient
        // descent must reduce the loss.
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(3);
        let net = MLP::new(&graph, 3, &[4, 4, 1], &mut rng).unwrap();
        let params = net.parameters();
        let loss_fn = MSELoss::new(Reduction::Sum);

        let xs: [[f64; 3]; 4] = [
            [2.0, 3.0, -1.0],
            [3.0, -1.0, 0.5],
            [0.5, 1.0, 1.0],
            [1.0, 1.0, -1.0],
        ];
        let ys = [1.0, -1.0, -1.0, 1.0];

        let mark = graph.checkpoint();
        let mut first_loss = None;
        let mut last_loss = 0.0;

        for _ in 0..50 {
            graph.rollback(mark);
            net.zero_grad();

            let mut predictions = Vec::with_capacity(xs.len());
            for x in &xs {
                let inputs = graph.values(x);
                predictions.push(net.forward(&inputs).unwrap().remove(0));
            }
            let loss = loss_fn.calculate(&predictions, &ys).unwrap();
            loss.backward();

            for p in &params {
                p.set_value(p.value() - 0.05 * p.grad());
            }

            last_loss = loss.value();
            first_loss.get_or_insert(last_loss);
        }

        let first_loss = first_loss.unwrap();
        assert!(
            last_loss < first_loss * 0.5,
            "loss did not decrease: {} -> {}",
            first_loss,
            last_loss
        );
        assert!(last_loss.is_finite());
    }
}
