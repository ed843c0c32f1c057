//! # Branch and bound over batch integrality
//!
//! A min-cost flow is only useful here if every arc's flow divides evenly
//! into shipments of `volume` units; the true cost of an arc is
//! `cost * ceil(flow / volume)`, not `cost * flow`. [`solve`] finds the
//! primal optimum, then — mirroring `branch_and_bound.cpp`'s recursive
//! `BranchAndBound` — repeatedly picks an arc whose flow isn't a multiple of
//! `volume` and forks into two children that force it to the nearest
//! multiple from below or above, resolving each with [`crate::dual`] since
//! only that one arc's bounds changed. It compares the node's own flow
//! against both children's and keeps whichever achieves the lowest
//! objective, exactly as the original's `best_flow(flow)` seed does; it does
//! not maintain a global best-bound to prune whole subtrees, so (like the
//! original) this is an exhaustive enumeration of the branch tree rather
//! than a pruned one.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dual;
use crate::error::SolverError;
use crate::model::{Basis, Graph};
use crate::primal;

#[cfg(test)]
mod test;

/// A batch-integral flow together with its basis and true (batched) cost.
#[derive(Debug, Clone)]
pub struct Solution {
    pub flow: Vec<i64>,
    pub basis: Basis,
    pub objective: i64,
}

/// The batched objective: `Σ cost_e * ceil(flow_e / volume)`, matching
/// `GetTargetFunctionValue`.
pub fn objective(graph: &Graph, flow: &[i64], volume: i64) -> i64 {
    graph
        .arcs()
        .iter()
        .zip(flow)
        .map(|(arc, &f)| arc.cost * ceil_div(f, volume))
        .sum()
}

fn ceil_div(flow: i64, volume: i64) -> i64 {
    (flow + volume - 1) / volume
}

/// Find the cheapest batch-integral flow on `graph`: a primal-optimal flow
/// followed by branch-and-bound over arcs whose flow doesn't divide evenly
/// by `volume`. `seed` drives the dual method's tie-break randomization, so
/// the same seed reproduces the same search.
pub fn solve(graph: &Graph, volume: i64, seed: u64) -> Result<Solution, SolverError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (flow, basis) = primal::solve(graph)?;
    branch(graph, flow, basis, volume, &mut rng)
}

fn branch(graph: &Graph, flow: Vec<i64>, basis: Basis, volume: i64, rng: &mut StdRng) -> Result<Solution, SolverError> {
    let fractional_arc = graph.arcs().iter().enumerate().find_map(|(index, _)| (flow[index] % volume != 0).then_some(index));

    let Some(arc_index) = fractional_arc else {
        let objective = objective(graph, &flow, volume);
        return Ok(Solution { flow, basis, objective });
    };

    let kept_objective = objective(graph, &flow, volume);
    let mut candidates = vec![Solution { flow: flow.clone(), basis: basis.clone(), objective: kept_objective }];
    let arc = graph.arc(arc_index);

    let raised_low = (flow[arc_index] / volume + 1) * volume;
    if raised_low <= arc.limit {
        let child_graph = graph.with_tightened_arc(arc_index, Some(raised_low), None);
        if let Ok((child_flow, child_basis, _warning)) = dual::solve(&child_graph, basis.clone(), rng) {
            if let Ok(solution) = branch(&child_graph, child_flow, child_basis, volume, rng) {
                candidates.push(solution);
            }
        }
    }

    let lowered_limit = (flow[arc_index] / volume) * volume;
    if lowered_limit >= arc.low_limit {
        let child_graph = graph.with_tightened_arc(arc_index, None, Some(lowered_limit));
        if let Ok((child_flow, child_basis, _warning)) = dual::solve(&child_graph, basis.clone(), rng) {
            if let Ok(solution) = branch(&child_graph, child_flow, child_basis, volume, rng) {
                candidates.push(solution);
            }
        }
    }

    // candidates always holds at least the kept f*, so this never falls through to the error.
    candidates.into_iter().min_by_key(|solution| solution.objective).ok_or(SolverError::InfeasibleDual)
}
