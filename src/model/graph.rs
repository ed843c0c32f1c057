//! The graph model: nodes, arcs, and the undirected incidence lists built over
//! them. A `Graph` is validated once at construction so every downstream
//! component (basis utilities, primal simplex, dual simplex, branch-and-bound)
//! can treat it as a precondition rather than re-checking it in a hot loop.

use std::collections::HashSet;

use crate::error::SolverError;
use crate::model::arc::Arc;
use crate::model::node::Node;

/// A basis is a spanning tree of the graph, represented as the set of arc
/// indices it contains. `|basis| == graph.num_nodes() - 1` is the central
/// invariant maintained by every pivot.
pub type Basis = HashSet<usize>;

/// A connected directed graph with signed node production and capacitated
/// arcs. Arcs carry direction; the incidence lists stored here are undirected
/// (each arc appears at both of its endpoints) so basis traversals can walk
/// the spanning tree without caring which way an arc points.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
    incidence: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph from its nodes and arcs, validating the invariants of
    /// the data model: dense, in-range node ids; `low_limit <= limit` on every
    /// arc; zero total production; and connectivity (a prerequisite for any
    /// spanning-tree basis to exist).
    pub fn new(nodes: Vec<Node>, arcs: Vec<Arc>) -> Result<Graph, SolverError> {
        if nodes.is_empty() {
            return Err(SolverError::EmptyGraph);
        }

        let n = nodes.len();
        for (i, node) in nodes.iter().enumerate() {
            if node.vertex != i {
                return Err(SolverError::BadInput(format!(
                    "node ids must be dense and 0-based; expected {i}, found {}",
                    node.vertex
                )));
            }
        }

        let total_production: i64 = nodes.iter().map(|n| n.production).sum();
        if total_production != 0 {
            return Err(SolverError::BadInput(format!(
                "node productions must sum to zero, found {total_production}"
            )));
        }

        for (i, arc) in arcs.iter().enumerate() {
            if arc.from >= n || arc.to >= n {
                return Err(SolverError::BadInput(format!(
                    "arc {i} references an out-of-range node ({} -> {})",
                    arc.from, arc.to
                )));
            }
            if arc.low_limit > arc.limit {
                return Err(SolverError::BadInput(format!(
                    "arc {i} has low_limit {} greater than limit {}",
                    arc.low_limit, arc.limit
                )));
            }
        }

        let mut incidence = vec![Vec::new(); n];
        for (i, arc) in arcs.iter().enumerate() {
            incidence[arc.from].push(i);
            incidence[arc.to].push(i);
        }

        let graph = Graph { nodes, arcs, incidence };
        if !graph.is_connected() {
            return Err(SolverError::BadInput(
                "graph is not connected: no spanning tree exists".to_string(),
            ));
        }

        Ok(graph)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn arc(&self, index: usize) -> &Arc {
        &self.arcs[index]
    }

    /// Arc indices touching `vertex`, in either direction.
    pub fn incident_arcs(&self, vertex: usize) -> &[usize] {
        &self.incidence[vertex]
    }

    /// Return a copy of this graph with a single arc's bounds tightened, as
    /// branch-and-bound does for each child subproblem. Never mutates `self`.
    pub fn with_tightened_arc(&self, arc_index: usize, low_limit: Option<i64>, limit: Option<i64>) -> Graph {
        let mut arcs = self.arcs.clone();
        if let Some(low_limit) = low_limit {
            arcs[arc_index].low_limit = low_limit;
        }
        if let Some(limit) = limit {
            arcs[arc_index].limit = limit;
        }
        Graph {
            nodes: self.nodes.clone(),
            arcs,
            incidence: self.incidence.clone(),
        }
    }

    fn is_connected(&self) -> bool {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![0usize];
        visited[0] = true;
        let mut count = 1;

        while let Some(vertex) = stack.pop() {
            for &arc_index in &self.incidence[vertex] {
                let other = self.arcs[arc_index].other_endpoint(vertex);
                if !visited[other] {
                    visited[other] = true;
                    count += 1;
                    stack.push(other);
                }
            }
        }

        count == self.nodes.len()
    }
}
