//! Typed failure modes for the solver. Every fatal exit path in the spec maps to
//! exactly one variant here; `DuallyDegenerate` is deliberately absent because the
//! spec treats it as a non-fatal warning rather than an error (see [`SolverWarning`]).

use thiserror::Error;

/// A fatal failure of some part of the solve. These are never recovered inside
/// the solver itself; branch-and-bound catches them at the per-child call site
/// and treats the child as infeasible rather than propagating the error further.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("phase I left non-zero flow on an artificial arc: the problem is infeasible")]
    InfeasiblePrimal,

    #[error("basis repair could not find a candidate that keeps the basis spanning")]
    NonSpanningBasis,

    #[error("dual simplex found no arc that could absorb a bound violation: the tightened problem is infeasible")]
    InfeasibleDual,

    #[error("bad input: {0}")]
    BadInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A non-fatal condition surfaced to the caller without aborting the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverWarning {
    /// A non-basis arc had zero reduced cost while building a pseudo-flow (§4.D
    /// step 2). The implementation proceeds using the arc's lower bound.
    DuallyDegenerate,
}
