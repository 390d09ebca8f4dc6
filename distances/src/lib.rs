//! Cairn Distances: transition-graph orchestration over the search engine.
//!
//! This crate adapts a labeled transition graph into the two transition
//! functions the search engine needs, runs the bidirectional computation,
//! classifies states as unreachable/irrelevant/live, and keeps results
//! consistent across abstraction (state-merging) steps.
//!
//! # Key types
//!
//! - [`TransitionGraph`] — states, costed labeled edges, initial state,
//!   goal predicate
//! - [`Distances`] — the orchestrator: computation, classification,
//!   abstraction updates, query surface

#![forbid(unsafe_code)]

pub mod distances;
pub mod graph;

pub use distances::Distances;
pub use graph::{LabeledTransition, TransitionGraph};
