// scalargrad-core/src/autograd/graph.rs

use crate::graph::{GraphData, NodeId};
use std::collections::HashSet;

/// Builds a topological ordering of every node reachable from `root`:
/// depth-first post-order, so every operand appears strictly before every
/// node that consumes it.
///
/// The visited set is keyed by `NodeId` (arena index), i.e. node identity,
/// never value equality. A node reachable through multiple paths is visited
/// once; termination is guaranteed because nodes are write-once and operands
/// always predate their consumers, so the graph cannot contain cycles.
///
/// Implemented with an explicit stack: each entry is pushed twice, first to
/// expand its operands, then (marked) to be emitted once they are done.
/// `pub(crate)` as it is an internal detail of the autograd system, exposed
/// to tests that assert ordering validity.
pub(crate) fn topological_sort(data: &GraphData, root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            order.push(id);
            continue;
        }
        if !visited.insert(id) {
            continue;
        }
        stack.push((id, true));
        for operand in data.node(id).op.operands().into_iter().flatten() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }

    order
}

// --- Tests ---
