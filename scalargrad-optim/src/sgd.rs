// scalargrad-optim/src/sgd.rs

use crate::Optimizer;
use scalargrad_core::Value;

/// Implements stochastic gradient descent.
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * grad(p)`
#[derive(Debug)]
pub struct SGD {
    lr: f64, // Learning rate
}

impl SGD {
    /// Creates a new SGD optimizer instance.
    ///
    /// # Arguments
    /// * `lr` - The learning rate.
    pub fn new(lr: f64) -> Self {
        SGD { lr }
    }
}

impl Optimizer for SGD {
    /// Performs a single optimization step (parameter update).
    fn step(&mut self, params: &[Value]) {
        for param in params {
            param.set_value(param.value() - self.lr * param.grad());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalargrad_core::Graph;

    #[test]
    fn test_sgd_step() {
        let graph = Graph::new();
        let p1 = graph.value(1.0);
        let p2 = graph.value(3.0);
        let p3 = graph.value(5.0); // No gradient

        p1.set_grad(10.0);
        p2.set_grad(-20.0);

        let mut optim = SGD::new(0.1);
        optim.step(&[p1.clone(), p2.clone(), p3.clone()]);

        // p = p - lr * grad
        assert!((p1.value() - 0.0).abs() < 1e-12, "p1 mismatch: {:?}", p1);
        assert!((p2.value() - 5.0).abs() < 1e-12, "p2 mismatch: {:?}", p2);
        assert!((p3.value() - 5.0).abs() < 1e-12, "p3 mismatch: {:?}", p3);
    }

    #[test]
    fn test_sgd_zero_grad() {
        let graph = Graph::new();
        let p1 = graph.value(1.0);
        let p2 = graph.value(2.0);
        p1.set_grad(0.5);

        let optim = SGD::new(0.1);
        optim.zero_grad(&[p1.clone(), p2.clone()]);

        assert_eq!(p1.grad(), 0.0, "grad of p1 should be zero after zero_grad");
        assert_eq!(p2.grad(), 0.0, "grad of p2 should be zero after zero_grad");
    }

    #[test]
    fn test_sgd_drives_a_parameter_to_a_target() {
        // Minimize (w - 4)^2 by repeated forward/backward/step cycles.
        let graph = Graph::new();
        let w = graph.value(0.0);
        let mark = graph.checkpoint();
        let mut optim = SGD::new(0.1);

        for _ in 0..50 {
            graph.rollback(mark);
            optim.zero_grad(&[w.clone()]);
            let loss = (&w - 4.0).powf(2.0);
            loss.backward();
            optim.step(&[w.clone()]);
        }

        assert!((w.value() - 4.0).abs() < 1e-3, "w = {}", w.value());
    }
}
