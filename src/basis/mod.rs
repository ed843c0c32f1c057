//! # Basis utilities
//!
//! Potentials, fundamental-cycle tracing, and post-order leaf-to-root ranking
//! over the spanning tree formed by the current basis. Every function here
//! assumes `basis` is a valid spanning tree of `graph` (`|basis| == n - 1`,
//! connected, acyclic); violating that is a precondition failure, not a
//! recoverable error, so callers get [`SolverError::NonSpanningBasis`] rather
//! than a silently wrong answer.
//!
//! `find_cycle` and `dfs_levels` walk the tree with an explicit stack rather
//! than native recursion, per the design note that a deep spanning tree
//! shouldn't force deep call-stack recursion.

use crate::error::SolverError;
use crate::model::{Basis, Graph};

/// Compute node potentials for the given basis: `π_0 = 0`, and for every
/// basis arc `(u -> v, cost c)`, `π_v = π_u + c`. Unique given a spanning-tree
/// basis, so this is implemented as a single tree walk from node 0 rather than
/// the repeated-scan fixed point in the reference description — both reach the
/// identical postcondition (every node's potential determined), but the tree
/// walk is linear instead of quadratic.
pub fn compute_potentials(graph: &Graph, basis: &Basis) -> Result<Vec<i64>, SolverError> {
    let n = graph.num_nodes();
    let mut potentials = vec![0i64; n];
    let mut known = vec![false; n];
    known[0] = true;

    let mut stack = vec![0usize];
    let mut known_count = 1;

    while let Some(vertex) = stack.pop() {
        for &arc_index in graph.incident_arcs(vertex) {
            if !basis.contains(&arc_index) {
                continue;
            }
            let arc = graph.arc(arc_index);
            let other = arc.other_endpoint(vertex);
            if known[other] {
                continue;
            }
            potentials[other] = if vertex == arc.from {
                potentials[vertex] + arc.cost
            } else {
                potentials[vertex] - arc.cost
            };
            known[other] = true;
            known_count += 1;
            stack.push(other);
        }
    }

    if known_count != n {
        return Err(SolverError::NonSpanningBasis);
    }

    Ok(potentials)
}

/// Trace the unique path from `start` to `stop` through `basis` arcs only.
/// Returns each arc on the path along with whether it was traversed in its
/// native `from -> to` direction. The caller (primal pivot selection) appends
/// the entering arc and reverses the combined list to get a directed
/// traversal of the fundamental cycle; see `spec.md` §4.B/§4.C.
///
/// `forbidden_parent` is the node the entering arc's other endpoint sits at;
/// both call sites in primal pivoting pass `forbidden_parent == stop`. Since
/// `basis` is a tree, there is exactly one path between any two of its nodes,
/// so marking only `start` as visited already finds it without needing to
/// ban `forbidden_parent` outright — doing so would make a direct basis arc
/// between `start` and `stop` (the parallel-arc boundary case of §8)
/// unreachable even though it is the correct fundamental cycle.
///
/// Panics if `stop` is unreachable from `start` through `basis` — that would
/// mean `basis ∪ {entering arc}` does not contain exactly one cycle,
/// violating the caller's precondition.
pub fn find_cycle(
    graph: &Graph,
    basis: &Basis,
    start: usize,
    forbidden_parent: usize,
    stop: usize,
) -> Vec<(usize, bool)> {
    let _ = forbidden_parent;
    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut parent_vertex = vec![usize::MAX; n];
    let mut parent_arc = vec![usize::MAX; n];

    visited[start] = true;
    let mut stack = vec![start];

    while let Some(vertex) = stack.pop() {
        if vertex == stop {
            break;
        }
        for &arc_index in graph.incident_arcs(vertex) {
            if !basis.contains(&arc_index) {
                continue;
            }
            let other = graph.arc(arc_index).other_endpoint(vertex);
            if visited[other] {
                continue;
            }
            visited[other] = true;
            parent_vertex[other] = vertex;
            parent_arc[other] = arc_index;
            stack.push(other);
        }
    }

    assert!(
        visited[stop],
        "stop node {stop} unreachable from {start} through the basis; basis is not spanning"
    );

    let mut path = Vec::new();
    let mut vertex = stop;
    while vertex != start {
        let arc_index = parent_arc[vertex];
        let pv = parent_vertex[vertex];
        let arc = graph.arc(arc_index);
        let is_forward = pv == arc.from;
        path.push((arc_index, is_forward));
        vertex = pv;
    }
    path.reverse();
    path
}

/// Post-order rank of each node in the spanning tree rooted at `root`: a leaf
/// gets level 0, and every internal node's level is one more than its
/// deepest child. Used by the dual method to process nodes leaf-first, so
/// that at most one incident basis arc is still undetermined when a node is
/// visited.
pub fn dfs_levels(graph: &Graph, basis: &Basis, root: usize) -> Vec<usize> {
    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut parent = vec![None; n];
    let mut preorder = Vec::with_capacity(n);

    visited[root] = true;
    let mut stack = vec![root];
    while let Some(vertex) = stack.pop() {
        preorder.push(vertex);
        for &arc_index in graph.incident_arcs(vertex) {
            if !basis.contains(&arc_index) {
                continue;
            }
            let other = graph.arc(arc_index).other_endpoint(vertex);
            if visited[other] {
                continue;
            }
            visited[other] = true;
            parent[other] = Some(vertex);
            stack.push(other);
        }
    }

    let mut levels = vec![0usize; n];
    for &vertex in preorder.iter().rev() {
        if let Some(p) = parent[vertex] {
            levels[p] = levels[p].max(levels[vertex] + 1);
        }
    }
    levels
}

#[cfg(test)]
mod test;
