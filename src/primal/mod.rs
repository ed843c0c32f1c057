//! # Primal network simplex
//!
//! Phase I builds an initial basic feasible flow over an auxiliary network
//! anchored at one artificial node; Phase II then improves that flow along
//! fundamental cycles until every non-basis arc is optimal. Both phases
//! share the same pivoting loop (`pivot_to_optimality`), exactly as the
//! original source calls the same `Method` routine over the cost-zeroed
//! auxiliary network in Phase I and over the real network in Phase II.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::basis::{compute_potentials, find_cycle};
use crate::error::SolverError;
use crate::model::{Arc, Basis, Graph};

/// Run primal simplex to a feasible, cost-optimal integer flow: Phase I
/// builds a basic feasible solution via an auxiliary network, Phase II then
/// pivots it to optimality. Returns the flow (restricted to the real arcs)
/// and the basis found.
pub fn solve(graph: &Graph) -> Result<(Vec<i64>, Basis), SolverError> {
    let (mut flow, mut basis) = initial_feasible_flow(graph)?;
    pivot_to_optimality(graph, graph.arcs(), &mut flow, &mut basis)?;
    Ok((flow, basis))
}

/// Phase I: build a basic feasible flow by solving a feasibility LP over an
/// auxiliary network with one artificial hub node, then clean the artificial
/// arcs out of the resulting basis.
fn initial_feasible_flow(graph: &Graph) -> Result<(Vec<i64>, Basis), SolverError> {
    let n_real = graph.num_nodes();
    let hub = n_real;

    // Every real arc starts non-basic, sitting at its lower bound (not
    // necessarily zero — §8 scenario 4 exercises a nonzero low_limit). That
    // forced flow already satisfies some of each endpoint's production, so
    // the artificial network is sized against the *remaining* imbalance
    // rather than the raw production figure.
    let mut aux_arcs: Vec<Arc> = graph.arcs().to_vec();
    let mut aux_flow: Vec<i64> = aux_arcs.iter().map(|a| a.low_limit).collect();
    let mut basis: Basis = HashSet::new();
    for arc in aux_arcs.iter_mut() {
        arc.cost = 0;
    }

    let mut remaining_production: Vec<i64> = graph.nodes().iter().map(|n| n.production).collect();
    for arc in graph.arcs() {
        remaining_production[arc.from] -= arc.low_limit;
        remaining_production[arc.to] += arc.low_limit;
    }

    for node in graph.nodes() {
        let artificial_index = aux_arcs.len();
        basis.insert(artificial_index);
        let imbalance = remaining_production[node.vertex];
        // Artificial arcs carry cost 1 (real arcs are zeroed above) so that
        // Phase I minimizes total artificial flow; a zero-cost artificial
        // arc would make every reduced cost vanish and Phase I would quit
        // immediately without ever driving artificial flow to zero.
        if imbalance >= 0 {
            aux_arcs.push(Arc::new(node.vertex, hub, 1, 0, imbalance));
        } else {
            aux_arcs.push(Arc::new(hub, node.vertex, 1, 0, -imbalance));
        }
        aux_flow.push(imbalance.abs());
    }

    let aux_nodes = {
        let mut nodes = graph.nodes().to_vec();
        nodes.push(crate::model::Node::new(hub, 0));
        nodes
    };
    let aux_graph = Graph::new(aux_nodes, aux_arcs).expect("auxiliary network is connected by construction");

    pivot_to_optimality(&aux_graph, aux_graph.arcs(), &mut aux_flow, &mut basis)?;

    let real_arc_count = graph.num_arcs();
    for artificial_index in real_arc_count..aux_graph.num_arcs() {
        if aux_flow[artificial_index] != 0 {
            return Err(SolverError::InfeasiblePrimal);
        }
    }

    // Sweep real non-basis arcs: if an arc's fundamental cycle contains at
    // least two artificial arcs, swap one of them out for this real arc.
    for candidate in 0..real_arc_count {
        if basis.contains(&candidate) {
            continue;
        }
        let arc = aux_graph.arc(candidate);
        let cycle = find_cycle(&aux_graph, &basis, arc.to, arc.from, arc.from);

        let artificial_in_cycle: Vec<usize> = cycle
            .iter()
            .map(|&(edge, _)| edge)
            .filter(|&edge| edge >= real_arc_count)
            .collect();

        if artificial_in_cycle.len() >= 2 {
            basis.remove(&artificial_in_cycle[1]);
            basis.insert(candidate);
        }
    }

    basis.retain(|&edge| edge < real_arc_count);
    debug_assert_eq!(basis.len(), n_real - 1);

    let flow = aux_flow[..real_arc_count].to_vec();
    Ok((flow, basis))
}

/// Phase II pivoting loop. Repeatedly selects the non-basis arc with the
/// largest-magnitude violated reduced cost, augments flow around its
/// fundamental cycle, and swaps the binding arc out of the basis — until no
/// non-basis arc violates optimality.
///
/// This same loop is used, unaltered, by Phase I on the cost-zeroed
/// auxiliary network: optimality there is equivalent to feasibility of the
/// real problem.
pub(crate) fn pivot_to_optimality(
    graph: &Graph,
    arcs: &[Arc],
    flow: &mut [i64],
    basis: &mut Basis,
) -> Result<(), SolverError> {
    loop {
        let potentials = compute_potentials(graph, basis)?;

        let Some(entering) = select_entering_arc(arcs, basis, &potentials, flow) else {
            break;
        };

        let entering_arc = arcs[entering];
        let cycle = if flow[entering] == entering_arc.low_limit {
            let mut cycle = find_cycle(graph, basis, entering_arc.to, entering_arc.from, entering_arc.from);
            cycle.push((entering, true));
            cycle
        } else {
            debug_assert_eq!(flow[entering], entering_arc.limit);
            let mut cycle = find_cycle(graph, basis, entering_arc.from, entering_arc.to, entering_arc.to);
            cycle.push((entering, false));
            cycle
        };
        let mut cycle = cycle;
        cycle.reverse();

        let (leave_pos, theta) = cycle
            .iter()
            .enumerate()
            .map(|(i, &(edge, is_forward))| {
                let room = if is_forward {
                    arcs[edge].limit - flow[edge]
                } else {
                    flow[edge] - arcs[edge].low_limit
                };
                (i, room)
            })
            .min_by_key(|&(_, room)| room)
            .expect("cycle is non-empty: it always includes the entering arc");

        for &(edge, is_forward) in &cycle {
            if is_forward {
                flow[edge] += theta;
            } else {
                flow[edge] -= theta;
            }
        }

        let leaving = cycle[leave_pos].0;
        trace!(entering, leaving, theta, "primal pivot");
        if leaving != entering {
            basis.remove(&leaving);
            basis.insert(entering);
        }
    }

    debug!(pivots_remaining = 0, "primal simplex reached optimality");
    Ok(())
}

/// Select the non-basis arc with the greatest violation of optimality: an
/// arc is optimal if `reduced_cost <= 0` at its lower bound or
/// `reduced_cost >= 0` at its upper bound; among the rest, pick the one
/// maximizing `|reduced_cost|`.
fn select_entering_arc(arcs: &[Arc], basis: &Basis, potentials: &[i64], flow: &[i64]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (index, arc) in arcs.iter().enumerate() {
        if basis.contains(&index) {
            continue;
        }
        let reduced_cost = (potentials[arc.to] - potentials[arc.from]) - arc.cost;
        let at_lower = flow[index] == arc.low_limit;
        let at_upper = flow[index] == arc.limit;
        let optimal = (reduced_cost <= 0 && at_lower) || (reduced_cost >= 0 && at_upper);
        if optimal {
            continue;
        }
        let magnitude = reduced_cost.abs();
        if best.map_or(true, |(_, best_mag)| magnitude > best_mag) {
            best = Some((index, magnitude));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod test;
