/// A directed, capacitated connection between two nodes.
///
/// Arcs are immutable inputs to a solve: the `flow` living on an arc is tracked
/// separately in a flow vector indexed by arc position, never inside the arc
/// itself, so that branch-and-bound can clone an arc array cheaply per child
/// and tighten a single arc's bounds without disturbing the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub from: usize,
    pub to: usize,
    pub cost: i64,
    pub low_limit: i64,
    pub limit: i64,
}

impl Arc {
    pub fn new(from: usize, to: usize, cost: i64, low_limit: i64, limit: i64) -> Arc {
        Arc { from, to, cost, low_limit, limit }
    }

    /// The endpoint of this arc that is not `vertex`, recovered without an
    /// explicit direction check. `vertex` must be one of `from`/`to`.
    pub fn other_endpoint(&self, vertex: usize) -> usize {
        vertex ^ self.from ^ self.to
    }
}
