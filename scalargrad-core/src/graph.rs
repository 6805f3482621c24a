// scalargrad-core/src/graph.rs

use crate::value::Value;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Identifier of a node inside a [`Graph`] arena.
///
/// Node identity is the arena index: two nodes with equal numeric values are
/// still distinct graph entities. `NodeId` is the key used by the visited set
/// of the topological sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node inside its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The operation that produced a node, together with the operand node(s).
///
/// The operand set is fixed at construction time and never mutated afterwards.
/// Since operands always predate the output node in the arena, the graph is
/// acyclic by construction. `Pow` carries its exponent as a plain `f64`: a
/// node-valued exponent is not representable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Op {
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Pow(NodeId, f64),
    Tanh(NodeId),
    Exp(NodeId),
    Relu(NodeId),
}

impl Op {
    /// Direct operands of the node, producers first. Empty for leaves.
    pub(crate) fn operands(&self) -> [Option<NodeId>; 2] {
        match *self {
            Op::Leaf => [None, None],
            Op::Add(a, b) | Op::Mul(a, b) => [Some(a), Some(b)],
            Op::Pow(a, _) | Op::Tanh(a) | Op::Exp(a) | Op::Relu(a) => [Some(a), None],
        }
    }

    /// Diagnostic label of the operation. Purely informational.
    pub(crate) fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(..) => "+",
            Op::Mul(..) => "*",
            Op::Pow(..) => "**",
            Op::Tanh(..) => "tanh",
            Op::Exp(..) => "exp",
            Op::Relu(..) => "ReLU",
        }
    }
}

/// One scalar node of the computation graph: the forward value, the gradient
/// accumulator (d root / d this node) and the operation tag linking it to its
/// operands.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
}

/// Arena owning every node of one computation graph by value.
///
/// Nodes are append-only; links between nodes are [`NodeId`] indices rather
/// than owning references, so the whole graph can be dropped or truncated in
/// bulk.
#[derive(Debug, Default)]
pub(crate) struct GraphData {
    pub(crate) nodes: Vec<Node>,
}

impl GraphData {
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Appends a new node with the given forward value and operation tag.
    /// Gradients always start at zero.
    pub(crate) fn record(&mut self, value: f64, op: Op) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            grad: 0.0,
            op,
        });
        id
    }

    pub(crate) fn push_leaf(&mut self, value: f64) -> NodeId {
        self.record(value, Op::Leaf)
    }
}

/// Handle to a computation-graph arena.
///
/// `Graph` uses `Rc<RefCell<GraphData>>` internally so that the arena can be
/// shared cheaply between the graph handle and every [`Value`] recorded on it,
/// while metadata (values, gradients) stays mutable through shared references.
/// The engine is single-threaded by design; one forward+backward cycle owns
/// its graph exclusively.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) data: Rc<RefCell<GraphData>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Records a leaf node (no operands) holding `value` and returns a handle
    /// to it. Leaves are the inputs, weights and biases of a computation.
    pub fn value(&self, value: f64) -> Value {
        let id = self.data.borrow_mut().push_leaf(value);
        Value {
            graph: Rc::clone(&self.data),
            id,
        }
    }

    /// Records one leaf per element of `values`, in order.
    pub fn values(&self, values: &[f64]) -> Vec<Value> {
        values.iter().map(|&v| self.value(v)).collect()
    }

    /// Number of nodes currently held by the arena.
    pub fn len(&self) -> usize {
        self.data.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.borrow().nodes.is_empty()
    }

    /// Resets the gradient of every node to zero.
    ///
    /// `backward()` only ever adds to gradients (and seeds the root); clearing
    /// stale gradients between iterations is the caller's responsibility, and
    /// this is the bulk tool for it.
    pub fn zero_grads(&self) {
        for node in self.data.borrow_mut().nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Returns a mark designating the current end of the arena, to be passed
    /// to [`Graph::rollback`].
    pub fn checkpoint(&self) -> usize {
        self.len()
    }

    /// Drops every node recorded after `checkpoint`, in bulk.
    ///
    /// Nodes recorded before the mark (typically parameters) survive with
    /// their values and gradients intact. Handles to dropped nodes must not
    /// be used afterwards. This is how a training loop reuses one arena
    /// across iterations instead of leaking intermediate nodes.
    ///
    /// # Panics
    /// Panics if `checkpoint` is greater than the current arena length.
    pub fn rollback(&self, checkpoint: usize) {
        let mut data = self.data.borrow_mut();
        assert!(
            checkpoint <= data.nodes.len(),
            "rollback mark {} exceeds arena length {}",
            checkpoint,
            data.nodes.len()
        );
        debug!(
            "rollback: dropping {} nodes, {} remain",
            data.nodes.len() - checkpoint,
            checkpoint
        );
        data.nodes.truncate(checkpoint);
    }
}

// --- Tests ---
