use super::*;
use crate::model::{Arc, Node};

fn diamond() -> Graph {
    let nodes = vec![Node::new(0, 10), Node::new(1, 0), Node::new(2, 0), Node::new(3, -10)];
    let arcs = vec![
        Arc::new(0, 1, 1, 0, 10),
        Arc::new(0, 2, 2, 0, 10),
        Arc::new(1, 3, 1, 0, 10),
        Arc::new(2, 3, 1, 0, 10),
    ];
    Graph::new(nodes, arcs).unwrap()
}

#[test]
fn unit_volume_never_branches() {
    // Every integer flow is already a multiple of 1, so the root's primal
    // solution is itself the leaf: no branching needed.
    let graph = diamond();
    let solution = solve(&graph, 1, 0).unwrap();
    assert_eq!(solution.flow, vec![10, 0, 10, 0]);
    assert_eq!(solution.objective, 20);
}

#[test]
fn batching_forces_a_detour_onto_the_costlier_parallel_arc() {
    // A cheap arc capped at 10 and a pricier parallel arc are the only two
    // routes for 12 units. The continuous optimum saturates the cheap arc
    // (flow 10) and sends the 2-unit remainder over the costly one — but 10
    // isn't a multiple of the batch size, and there's no way to *raise* it
    // (its own limit is 10), so branch-and-bound must cap it down to the
    // nearest multiple below and push the rest onto the costly arc instead.
    let nodes = vec![Node::new(0, 12), Node::new(1, -12)];
    let arcs = vec![Arc::new(0, 1, 1, 0, 10), Arc::new(0, 1, 5, 0, 12)];
    let graph = Graph::new(nodes, arcs).unwrap();

    let solution = solve(&graph, 4, 0).unwrap();

    assert_eq!(solution.flow, vec![8, 4]);
    assert_eq!(solution.objective, 2 * 1 + 1 * 5);
}

#[test]
fn single_arc_with_no_alternate_route_keeps_its_own_flow_when_both_branches_fail() {
    // With only one arc carrying all the flow, there is no detour to absorb
    // a batch-size rounding: raising its flow to the next multiple of volume
    // exceeds its limit, and lowering it can no longer carry the required
    // total. Both branches collapse, but the node's own flow was already
    // feasible, just not batch-integral — branch-and-bound must keep it
    // rather than report the whole problem infeasible.
    let nodes = vec![Node::new(0, 7), Node::new(1, -7)];
    let arcs = vec![Arc::new(0, 1, 3, 0, 7)];
    let graph = Graph::new(nodes, arcs).unwrap();

    let solution = solve(&graph, 4, 0).unwrap();
    assert_eq!(solution.flow, vec![7]);
    assert_eq!(solution.objective, 6);
}

#[test]
fn diamond_keeps_the_undetoured_flow_when_every_branch_costs_more() {
    // At volume 7 both arcs out of node 0 carry fractional flow (10 isn't a
    // multiple of 7), but every way of forcing batch-integrality detours some
    // flow onto the costlier parallel path. The continuous optimum itself —
    // cost 1*ceil(10/7) + 1*ceil(10/7) = 4 — beats every detour, so
    // branch-and-bound must keep it instead of returning a worse child.
    let graph = diamond();

    let solution = solve(&graph, 7, 0).unwrap();

    assert_eq!(solution.flow, vec![10, 0, 10, 0]);
    assert_eq!(solution.objective, 4);
}
