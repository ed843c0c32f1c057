use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::SolverError;
use crate::model::{Arc, Graph, Node};

/// Parse `edges_file` and `nodes_file` into a validated [`Graph`], exactly
/// per the wire format in `spec.md` §6: `edges_file`'s first line is an arc
/// count `m`, followed by `m` lines of `from to cost limit`; `nodes_file`'s
/// first line is a record count `k`, followed by `k` lines of
/// `vertex production` — one line for every node with non-zero production.
/// Every other node in range defaults to zero production, and the node
/// count itself is inferred from the highest vertex id mentioned by either
/// file. An isolated vertex in `nodes_file` with no incident arc fails
/// [`Graph::new`]'s connectivity check, which is this crate's rejection path
/// for that case rather than a separate check here.
///
/// `low_limit` is always `0` for arcs read from a file; a non-zero lower
/// bound only ever arises from branch-and-bound tightening a child
/// subproblem, never from input.
pub fn read_graph(edges_path: &Path, nodes_path: &Path) -> Result<Graph, SolverError> {
    let edges_text = fs::read_to_string(edges_path)?;
    let nodes_text = fs::read_to_string(nodes_path)?;

    let (arcs, max_edge_vertex) = parse_edges(&edges_text)?;
    let (productions, max_node_vertex) = parse_nodes(&nodes_text)?;

    let n = max_edge_vertex.max(max_node_vertex) + 1;
    let nodes = (0..n)
        .map(|vertex| Node::new(vertex, productions.get(&vertex).copied().unwrap_or(0)))
        .collect();

    Graph::new(nodes, arcs)
}

fn parse_edges(text: &str) -> Result<(Vec<Arc>, usize), SolverError> {
    let mut lines = text.lines();
    let count: usize = parse_field(lines.next(), "edge count")?;

    let mut arcs = Vec::with_capacity(count);
    let mut max_vertex = 0usize;
    for i in 0..count {
        let line = lines
            .next()
            .ok_or_else(|| SolverError::BadInput(format!("edges file: expected {count} arc records, found {i}")))?;
        let mut fields = line.split_whitespace();
        let from: usize = parse_field(fields.next(), "arc from")?;
        let to: usize = parse_field(fields.next(), "arc to")?;
        let cost: i64 = parse_field(fields.next(), "arc cost")?;
        let limit: i64 = parse_field(fields.next(), "arc limit")?;
        max_vertex = max_vertex.max(from).max(to);
        arcs.push(Arc::new(from, to, cost, 0, limit));
    }
    Ok((arcs, max_vertex))
}

fn parse_nodes(text: &str) -> Result<(HashMap<usize, i64>, usize), SolverError> {
    let mut lines = text.lines();
    let count: usize = parse_field(lines.next(), "node record count")?;

    let mut productions = HashMap::with_capacity(count);
    let mut max_vertex = 0usize;
    for i in 0..count {
        let line = lines
            .next()
            .ok_or_else(|| SolverError::BadInput(format!("nodes file: expected {count} node records, found {i}")))?;
        let mut fields = line.split_whitespace();
        let vertex: usize = parse_field(fields.next(), "node vertex")?;
        let production: i64 = parse_field(fields.next(), "node production")?;
        max_vertex = max_vertex.max(vertex);
        productions.insert(vertex, production);
    }
    Ok((productions, max_vertex))
}

fn parse_field<T: FromStr>(field: Option<&str>, what: &str) -> Result<T, SolverError> {
    field
        .ok_or_else(|| SolverError::BadInput(format!("missing {what}")))?
        .trim()
        .parse()
        .map_err(|_| SolverError::BadInput(format!("expected an integer for {what}")))
}
