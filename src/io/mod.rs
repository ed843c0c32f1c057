//! # I/O
//!
//! Parses the two plain-text input files into a [`crate::model::Graph`]. The
//! teacher's own `io` module exists to pick among several interchangeable
//! file formats behind `Reader`/`Writer` traits and a `FileType` factory;
//! this crate has exactly one wire format (`spec.md` §6), so that layer
//! collapses to a single free function rather than a factory over an enum —
//! see DESIGN.md for the reasoning.

mod text;

pub use text::read_graph;
