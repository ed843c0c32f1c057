//! # Batched minimum-cost network flow solver
//!
//! Solves a directed graph with signed node production and capacitated arcs
//! for the cheapest flow whose cost is charged in whole batches of `volume`
//! units per arc. [`bnb::solve`] is the end-to-end entry point: primal
//! network simplex ([`primal`]) finds a continuous-flow optimum, then
//! branch-and-bound ([`bnb`]) repairs it to batch-integrality, calling back
//! into dual network simplex ([`dual`]) to re-optimize each tightened child
//! subproblem.

pub mod basis;
pub mod bnb;
pub mod cli;
pub mod dual;
pub mod error;
pub mod io;
pub mod model;
pub mod primal;
