//! # Dual network simplex
//!
//! Where primal simplex starts from a feasible flow and restores optimality,
//! dual simplex starts from an *optimal* (dual-feasible) basis and restores
//! feasibility. Branch-and-bound uses this: tightening one arc's bounds on an
//! already-optimal basis can never break dual feasibility (arc costs never
//! change, so every reduced cost is unchanged), but it can push that arc's
//! own flow out of its new bounds. Dual simplex repairs exactly that.
//!
//! `build_pseudo_flow` mirrors the original source's `GetPotentialsDualMethod`
//! / `GetOptimalOrder` / `GetPseudoFlow` trio: non-basis arc flows are read
//! directly off the sign of their reduced cost, and basis arc flows are then
//! solved bottom-up from the leaves by conservation, using the same
//! [`crate::basis::dfs_levels`] ranking the original computes by DFS. The
//! pivot loop itself is not in the original source — its dual method only
//! ever constructs one pseudo-flow — so it is a straightforward dual network
//! simplex pivot built from scratch, following the same "recompute potentials
//! from the current basis every iteration" style as [`crate::primal`] rather
//! than maintaining them incrementally.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::basis::{compute_potentials, dfs_levels};
use crate::error::{SolverError, SolverWarning};
use crate::model::{Basis, Graph};


/// Repair a dual-feasible basis into a feasible, optimal flow. `basis` must
/// already be dual-feasible for `graph` (every reduced cost satisfies the
/// non-basis optimality sign condition) — true of any basis inherited from a
/// parent solve where only arc bounds, not costs, changed.
pub fn solve(graph: &Graph, mut basis: Basis, rng: &mut StdRng) -> Result<(Vec<i64>, Basis, Option<SolverWarning>), SolverError> {
    let mut warning = None;
    let flow = loop {
        let potentials = compute_potentials(graph, &basis)?;
        let (pseudo_flow, degenerate) = build_pseudo_flow(graph, &basis, &potentials);
        if degenerate {
            warning = Some(SolverWarning::DuallyDegenerate);
        }

        let Some(leaving) = select_leaving_arc(graph, &pseudo_flow, &basis) else {
            debug!("dual simplex reached primal feasibility");
            break pseudo_flow;
        };

        let entering = select_entering_arc(graph, &basis, &potentials, &pseudo_flow, leaving, rng)
            .ok_or(SolverError::InfeasibleDual)?;

        trace!(leaving, entering, "dual pivot");
        basis.remove(&leaving);
        basis.insert(entering);
    };

    Ok((flow, basis, warning))
}

/// Construct a dual-feasible pseudo-flow from a basis and its potentials:
/// non-basis arcs sit at whichever bound their reduced cost mandates, and
/// basis arc flows are then forced by conservation, leaf to root. The
/// resulting flow is not generally within `[low_limit, limit]` on basis
/// arcs — that is exactly the infeasibility the pivot loop corrects.
fn build_pseudo_flow(graph: &Graph, basis: &Basis, potentials: &[i64]) -> (Vec<i64>, bool) {
    let arcs = graph.arcs();
    let mut flow = vec![0i64; arcs.len()];
    let mut known = vec![false; arcs.len()];
    let mut degenerate = false;

    for (index, arc) in arcs.iter().enumerate() {
        if basis.contains(&index) {
            continue;
        }
        let reduced_cost = (potentials[arc.to] - potentials[arc.from]) - arc.cost;
        flow[index] = if reduced_cost < 0 {
            arc.low_limit
        } else if reduced_cost > 0 {
            arc.limit
        } else {
            degenerate = true;
            arc.low_limit
        };
        known[index] = true;
    }

    let levels = dfs_levels(graph, basis, 0);
    let mut order: Vec<usize> = (1..graph.num_nodes()).collect();
    order.sort_by_key(|&v| levels[v]);

    for vertex in order {
        let mut net_out_known = 0i64;
        let mut unknown_arc = None;
        for &arc_index in graph.incident_arcs(vertex) {
            if known[arc_index] {
                let arc = graph.arc(arc_index);
                net_out_known += if arc.from == vertex { flow[arc_index] } else { -flow[arc_index] };
            } else {
                debug_assert!(unknown_arc.is_none(), "more than one undetermined basis arc at node {vertex}");
                unknown_arc = Some(arc_index);
            }
        }

        if let Some(arc_index) = unknown_arc {
            let arc = graph.arc(arc_index);
            let production = graph.nodes()[vertex].production;
            flow[arc_index] = if arc.from == vertex {
                production - net_out_known
            } else {
                net_out_known - production
            };
            known[arc_index] = true;
        }
    }

    (flow, degenerate)
}

/// Pick the basis arc whose pseudo-flow most violates its bounds. Returns
/// `None` once every basis arc sits within bounds, meaning the current basis
/// is both dual- and primal-feasible, hence optimal.
fn select_leaving_arc(graph: &Graph, flow: &[i64], basis: &Basis) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for &arc_index in basis {
        let arc = graph.arc(arc_index);
        let violation = if flow[arc_index] < arc.low_limit {
            arc.low_limit - flow[arc_index]
        } else if flow[arc_index] > arc.limit {
            flow[arc_index] - arc.limit
        } else {
            0
        };
        if violation > 0 && best.map_or(true, |(_, best_violation)| violation > best_violation) {
            best = Some((arc_index, violation));
        }
    }
    best.map(|(index, _)| index)
}

/// Given the arc leaving the basis, find the non-basis arc that crosses the
/// fundamental cut in a direction that can absorb the leaving arc's
/// infeasibility while minimizing the disruption to dual feasibility
/// elsewhere (the arc with smallest `|reduced_cost|` among those eligible).
/// Ties are broken by a random shuffle, taking the first candidate confirmed
/// to leave the basis spanning.
fn select_entering_arc(
    graph: &Graph,
    basis: &Basis,
    potentials: &[i64],
    flow: &[i64],
    leaving: usize,
    rng: &mut StdRng,
) -> Option<usize> {
    let leaving_arc = graph.arc(leaving);
    let excess = flow[leaving] > leaving_arc.limit;

    let far_side = reachable_without(graph, basis, leaving, leaving_arc.to);

    let mut candidates: Vec<(usize, i64)> = Vec::new();
    for (index, arc) in graph.arcs().iter().enumerate() {
        if basis.contains(&index) || index == leaving {
            continue;
        }
        let from_far = far_side.contains(&arc.from);
        let to_far = far_side.contains(&arc.to);
        if from_far == to_far {
            continue; // doesn't cross the cut
        }
        let forward = !from_far && to_far; // same orientation as the leaving arc
        let eligible = if excess {
            (forward && flow[index] == arc.low_limit) || (!forward && flow[index] == arc.limit)
        } else {
            (forward && flow[index] == arc.limit) || (!forward && flow[index] == arc.low_limit)
        };
        if !eligible {
            continue;
        }
        let reduced_cost = (potentials[arc.to] - potentials[arc.from]) - arc.cost;
        candidates.push((index, reduced_cost.abs()));
    }

    if candidates.is_empty() {
        return None;
    }
    let min_magnitude = candidates.iter().map(|&(_, magnitude)| magnitude).min().unwrap();
    let mut tied: Vec<usize> = candidates
        .into_iter()
        .filter(|&(_, magnitude)| magnitude == min_magnitude)
        .map(|(index, _)| index)
        .collect();
    tied.shuffle(rng);
    tied.into_iter().find(|&candidate| would_stay_spanning(graph, basis, leaving, candidate))
}

/// Vertices reachable from `start` using only basis arcs other than
/// `excluded`. Removing one basis arc from a spanning tree always splits it
/// into exactly two components; this returns the one containing `start`.
fn reachable_without(graph: &Graph, basis: &Basis, excluded: usize, start: usize) -> HashSet<usize> {
    let mut visited = HashSet::new();
    visited.insert(start);
    let mut stack = vec![start];
    while let Some(vertex) = stack.pop() {
        for &arc_index in graph.incident_arcs(vertex) {
            if arc_index == excluded || !basis.contains(&arc_index) {
                continue;
            }
            let other = graph.arc(arc_index).other_endpoint(vertex);
            if visited.insert(other) {
                stack.push(other);
            }
        }
    }
    visited
}

/// A candidate that crosses the fundamental cut always reconnects the tree
/// once `leaving` is removed; this is a defensive confirmation rather than a
/// load-bearing search, since a cut-crossing arc can never fail it.
fn would_stay_spanning(graph: &Graph, basis: &Basis, leaving: usize, entering: usize) -> bool {
    let mut candidate = basis.clone();
    candidate.remove(&leaving);
    candidate.insert(entering);
    compute_potentials(graph, &candidate).is_ok()
}
