// scalargrad-core/src/value.rs

use crate::graph::{GraphData, NodeId};
use crate::ops::{activation, arithmetic};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle to one scalar node of a computation graph.
///
/// A `Value` is a cheap clone: it holds the shared arena plus the index of its
/// node. Cloning a handle never duplicates the node itself, so every clone
/// observes the same value and gradient. Arithmetic on `Value`s both computes
/// the forward result and records the operation on the graph, so that a later
/// [`Value::backward`] can propagate gradients through it.
#[derive(Clone)]
pub struct Value {
    pub(crate) graph: Rc<RefCell<GraphData>>,
    pub(crate) id: NodeId,
}

impl Value {
    /// The forward-computed value of this node.
    pub fn value(&self) -> f64 {
        self.graph.borrow().node(self.id).value
    }

    /// Overwrites the value of this node.
    ///
    /// Intended for leaf nodes: an external training loop updates parameters
    /// between forward passes this way.
    pub fn set_value(&self, value: f64) {
        self.graph.borrow_mut().node_mut(self.id).value = value;
    }

    /// The accumulated gradient d(root)/d(this node), as of the last
    /// [`Value::backward`] call that reached this node.
    pub fn grad(&self) -> f64 {
        self.graph.borrow().node(self.id).grad
    }

    /// Overwrites the gradient accumulator of this node.
    pub fn set_grad(&self, grad: f64) {
        self.graph.borrow_mut().node_mut(self.id).grad = grad;
    }

    /// Resets the gradient accumulator to zero. Must happen before each
    /// backward pass; `backward()` itself never clears gradients.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Diagnostic label of the operation that produced this node
    /// (`"+"`, `"*"`, `"tanh"`, ...; empty for leaves).
    pub fn op(&self) -> &'static str {
        self.graph.borrow().node(self.id).op.symbol()
    }

    /// Identifier of this node inside its arena.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Raises this value to a constant power.
    pub fn powf(&self, exponent: f64) -> Value {
        arithmetic::pow(self, exponent)
    }

    /// Hyperbolic tangent activation.
    pub fn tanh(&self) -> Value {
        activation::tanh(self)
    }

    /// Exponential, `e^self`.
    pub fn exp(&self) -> Value {
        activation::exp(self)
    }

    /// Rectified linear unit, `max(0, self)`.
    pub fn relu(&self) -> Value {
        activation::relu(self)
    }

    /// Runs the backward pass with this node as the root.
    ///
    /// Seeds this node's gradient to 1.0 (d root / d root), then propagates
    /// gradient contributions to every node this one depends on, in reverse
    /// topological order. Gradients accumulate; every other node is expected
    /// to start the pass at zero gradient. On a leaf this only performs the
    /// seeding.
    pub fn backward(&self) {
        let mut data = self.graph.borrow_mut();
        crate::autograd::run_backward(&mut data, self.id);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.graph.borrow();
        let node = data.node(self.id);
        write!(f, "Value(data={:.4}, grad={:.4})", node.value, node.grad)
    }
}

// --- Tests ---
