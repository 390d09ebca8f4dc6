//! Cairn Front: the (cost, depth) Pareto algebra.
//!
//! This crate is the dependency-free carrier layer of cairn. It defines the
//! `(h, d)` pair type, the non-dominated staircase container, the additive
//! merge algebra used to compose independently computed fronts, and the
//! scalarization objectives consumers apply to a finished front.
//!
//! # Crate dependency graph
//!
//! ```text
//! cairn_front  ←  cairn_search  ←  cairn_distances
//! (pair/front)    (lex queue,       (graph adapter,
//!                  dijkstra)         orchestration)
//! ```
//!
//! # Key types
//!
//! - [`ParetoPair`] — lexicographically ordered (cost, depth) value
//! - [`ParetoFront`] — ordered, mutually non-dominated pair sequence
//! - [`ObjectiveKind`] — scalarizations over a finished front
//! - [`ExpansionHistogram`] — explicit per-depth expansion context for the
//!   expected-work objective
//! - [`Aggregate`] — sum/max/min aggregation over composed front values

#![forbid(unsafe_code)]

pub mod compose;
pub mod front;
pub mod objective;
pub mod pair;

pub use compose::{evaluate_additive, merge_all, Aggregate};
pub use front::ParetoFront;
pub use objective::{ExpansionHistogram, ObjectiveKind};
pub use pair::{ParetoPair, INF};
