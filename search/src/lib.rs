//! Cairn Search: bidirectional lexicographic Dijkstra over Pareto pairs.
//!
//! This crate builds one [`cairn_front::ParetoFront`] per state per
//! direction by draining a lexicographically ordered frontier, with
//! dominance pruning against the growing fronts and cross-direction bound
//! tightening once the opposite direction has been computed.
//!
//! # Key types
//!
//! - [`DijkstraSearch`] — the per-direction search engine
//! - [`Direction`] / [`Algorithm`] — forward/backward, ordinary/pareto modes
//! - [`Successor`] — one (neighbor, edge cost) transition
//! - [`TransitionFn`] — the injected transition capability

#![forbid(unsafe_code)]

pub mod dijkstra;
pub mod queue;

pub use dijkstra::{Algorithm, Direction, DijkstraSearch, Successor, TransitionFn};
