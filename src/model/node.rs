/// A vertex in the network, identified by its dense index into the graph's
/// node vector. `production` is positive for a source, negative for a sink,
/// and zero for a transshipment node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub vertex: usize,
    pub production: i64,
}

impl Node {
    pub fn new(vertex: usize, production: i64) -> Node {
        Node { vertex, production }
    }
}
