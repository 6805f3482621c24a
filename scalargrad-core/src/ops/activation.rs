// scalargrad-core/src/ops/activation.rs

use crate::graph::Op;
use crate::value::Value;
use std::rc::Rc;

/// Hyperbolic tangent.
///
/// The forward value is computed as `(e^{2x} - 1) / (e^{2x} + 1)`; the
/// backward rule reads the stored output `t` and propagates `1 - t^2`.
pub fn tanh(a: &Value) -> Value {
    let id = {
        let mut g = a.graph.borrow_mut();
        let x = g.node(a.id).value;
        let e2x = (2.0 * x).exp();
        let t = (e2x - 1.0) / (e2x + 1.0);
        g.record(t, Op::Tanh(a.id))
    };
    Value {
        graph: Rc::clone(&a.graph),
        id,
    }
}

/// Exponential, `e^x`. The derivative equals the output itself.
pub fn exp(a: &Value) -> Value {
    let id = {
        let mut g = a.graph.borrow_mut();
        let v = g.node(a.id).value.exp();
        g.record(v, Op::Exp(a.id))
    };
    Value {
        graph: Rc::clone(&a.graph),
        id,
    }
}

/// Rectified linear unit, `max(0, x)`.
///
/// The backward rule gates on the output value being strictly positive, so
/// an input of exactly 0.0 receives no gradient.
pub fn relu(a: &Value) -> Value {
    let id = {
        let mut g = a.graph.borrow_mut();
        let x = g.node(a.id).value;
        let v = if x < 0.0 { 0.0 } else { x };
        g.record(v, Op::Relu(a.id))
    };
    Value {
        graph: Rc::clone(&a.graph),
        id,
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use crate::graph::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward_and_backward() {
        let graph = Graph::new();
        let x = graph.value(2.0);
        let t = x.tanh();
        assert_relative_eq!(t.value(), 0.9640275800758169, epsilon = 1e-12);
        t.backward();
        // d tanh / dx = 1 - tanh^2
        assert_relative_eq!(x.grad(), 1.0 - t.value() * t.value(), epsilon = 1e-12);
    }

    #[test]
    fn test_exp_gradient_equals_output() {
        let graph = Graph::new();
        let x = graph.value(1.5);
        let y = x.exp();
        y.backward();
        assert_relative_eq!(x.grad(), y.value(), epsilon = 1e-12);
        assert_relative_eq!(y.value(), 1.5f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_relu_positive_and_negative() {
        let graph = Graph::new();
        let x = graph.value(3.0);
        let y = x.relu();
        assert_eq!(y.value(), 3.0);
        y.backward();
        assert_eq!(x.grad(), 1.0);

        let graph = Graph::new();
        let x = graph.value(-3.0);
        let y = x.relu();
        assert_eq!(y.value(), 0.0);
        y.backward();
        assert_eq!(x.grad(), 0.0);
    }

    #[test]
    fn test_relu_boundary_at_zero() {
        // Output is 0.0 and the gradient gate (output > 0) stays closed.
        let graph = Graph::new();
        let x = graph.value(0.0);
        let y = x.relu();
        assert_eq!(y.value(), 0.0);
        y.backward();
        assert_eq!(x.grad(), 0.0);
    }
}
