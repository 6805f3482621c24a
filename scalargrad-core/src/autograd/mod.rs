// scalargrad-core/src/autograd/mod.rs

pub mod grad_check;
pub(crate) mod graph;

pub use grad_check::{check_grad, GradCheckError};

use crate::graph::{GraphData, NodeId, Op};
use graph::topological_sort;
use log::debug;

/// Runs the backward pass from `root` over the whole graph.
///
/// The pass proceeds in three steps:
/// 1. compute a topological ordering of every node reachable from the root,
/// 2. seed the root's gradient to 1.0 (d root / d root),
/// 3. walk the ordering in reverse and apply each node's local gradient rule.
///
/// Walking consumers before producers guarantees that by the time a node's
/// rule fires, its own gradient already holds the sum of all contributions
/// from downstream consumers. Every write below is an accumulation (`+=`),
/// never an assignment, which is what makes fan-out (a node feeding several
/// consumers) come out correct. Gradients of all nodes other than the root
/// are expected to be zero when this is called; resetting them between
/// iterations is the caller's responsibility.
pub(crate) fn run_backward(data: &mut GraphData, root: NodeId) {
    let order = topological_sort(data, root);
    debug!("backward pass over {} nodes", order.len());

    data.node_mut(root).grad = 1.0;

    for &id in order.iter().rev() {
        // Copy out the node header so the operand slots can be borrowed
        // mutably below.
        let node = *data.node(id);
        let g = node.grad;
        match node.op {
            Op::Leaf => {}
            Op::Add(a, b) => {
                data.node_mut(a).grad += g;
                data.node_mut(b).grad += g;
            }
            Op::Mul(a, b) => {
                let a_value = data.node(a).value;
                let b_value = data.node(b).value;
                data.node_mut(a).grad += b_value * g;
                data.node_mut(b).grad += a_value * g;
            }
            Op::Pow(a, n) => {
                let a_value = data.node(a).value;
                data.node_mut(a).grad += n * a_value.powf(n - 1.0) * g;
            }
            Op::Tanh(a) => {
                let t = node.value;
                data.node_mut(a).grad += (1.0 - t * t) * g;
            }
            Op::Exp(a) => {
                data.node_mut(a).grad += node.value * g;
            }
            Op::Relu(a) => {
                if node.value > 0.0 {
                    data.node_mut(a).grad += g;
                }
            }
        }
    }
}

// --- Tests ---
