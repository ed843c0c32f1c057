//! # Model
//!
//! Typed entities for the graph: arcs, nodes, and the undirected incidence
//! lists built over them. Arcs and nodes are immutable inputs to a solve;
//! see [`graph::Graph::with_tightened_arc`] for how branch-and-bound derives
//! child subproblems without mutating a shared graph.

mod arc;
mod graph;
mod node;

pub use arc::Arc;
pub use graph::{Basis, Graph};
pub use node::Node;
