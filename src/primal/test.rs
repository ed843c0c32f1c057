use super::*;
use crate::model::Node;

fn two_node_pipe() -> Graph {
    let nodes = vec![Node::new(0, 10), Node::new(1, -10)];
    let arcs = vec![Arc::new(0, 1, 5, 0, 10)];
    Graph::new(nodes, arcs).unwrap()
}

/// Diamond graph from `spec.md` §8 scenario 2: cheaper path is 0 -> 1 -> 3
/// (cost 2) over 0 -> 2 -> 3 (cost 3).
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
fn two_node_pipe_saturates_the_only_arc() {
    let graph = two_node_pipe();
    let (flow, basis) = solve(&graph).unwrap();
    assert_eq!(flow, vec![10]);
    assert_eq!(basis, [0].into_iter().collect());
}

#[test]
fn diamond_routes_flow_down_the_cheaper_path() {
    let graph = diamond();
    let (flow, _basis) = solve(&graph).unwrap();
    assert_eq!(flow, vec![10, 0, 10, 0]);
}

#[test]
fn lower_bound_activation_forces_flow_off_zero() {
    // §8 scenario 4: a single arc whose low_limit is above zero forces flow
    // onto it even though its cost is zero.
    let nodes = vec![Node::new(0, 5), Node::new(1, -5)];
    let arcs = vec![Arc::new(0, 1, 0, 3, 5)];
    let graph = Graph::new(nodes, arcs).unwrap();
    let (flow, _basis) = solve(&graph).unwrap();
    assert_eq!(flow, vec![5]);
}

#[test]
fn already_optimal_basis_pivots_zero_times() {
    let graph = diamond();
    let (mut flow, mut basis) = solve(&graph).unwrap();
    let flow_before = flow.clone();
    let basis_before = basis.clone();

    pivot_to_optimality(&graph, graph.arcs(), &mut flow, &mut basis).unwrap();

    assert_eq!(flow, flow_before);
    assert_eq!(basis, basis_before);
}

#[test]
fn solve_rejects_an_arc_too_tight_to_carry_required_flow() {
    // Production demands 10 units of flow but the only arc caps at 5 with a
    // low_limit of 5 on the wrong side — infeasible regardless of the path.
    let nodes = vec![Node::new(0, 10), Node::new(1, 0), Node::new(2, -10)];
    let arcs = vec![Arc::new(0, 1, 1, 0, 5), Arc::new(1, 2, 1, 0, 5)];
    let graph = Graph::new(nodes, arcs).unwrap();
    let result = solve(&graph);
    assert!(matches!(result, Err(SolverError::InfeasiblePrimal)));
}
