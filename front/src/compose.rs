//! Additive composition of independently computed fronts.
//!
//! Fronts computed over disjoint abstractions compose by summing pairs under
//! a shared bound ([`crate::ParetoFront::merge_additive`]); the helpers here
//! wrap the left-to-right fold and the scalarize-then-aggregate evaluation
//! that heuristic consumers run per state.

use crate::front::ParetoFront;
use crate::pair::INF;

/// Fold a non-empty list of fronts into their additive composition under
/// `bound`.
///
/// The first front is pruned to the bound, then each following front is
/// merged in; the fold short-circuits to the empty front the moment any
/// intermediate result is empty.
///
/// # Panics
///
/// Panics if `fronts` is empty — composing nothing is a caller error.
#[must_use]
pub fn merge_all(fronts: &[&ParetoFront], bound: i32) -> ParetoFront {
    assert!(!fronts.is_empty(), "merge_all requires at least one front");
    let mut merged = fronts[0].clone();
    merged.prune_with_bound(bound);
    for other in &fronts[1..] {
        if merged.is_empty() {
            break;
        }
        merged.merge_additive(other, bound);
    }
    merged
}

/// Aggregation over per-subset objective values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Sum of the subset values.
    Sum,
    /// Largest subset value.
    Max,
    /// Smallest subset value.
    Min,
}

impl Aggregate {
    /// Apply the aggregation to a non-empty value list.
    #[must_use]
    pub fn apply(self, values: &[f64]) -> f64 {
        debug_assert!(!values.is_empty(), "aggregate of no values");
        match self {
            Self::Sum => values.iter().sum(),
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }
}

/// Evaluate additively composable front subsets for one state.
///
/// Each subset's fronts are composed under the remaining budget
/// `bound - g`, scalarized with `objective` at their best pair, and the
/// per-subset minima are aggregated. Returns `INF` when any subset composes
/// to the empty front or scalarizes to an infinite objective — the state is
/// unreachable within the bound. Finite aggregates are rounded and clamped
/// at `INF - 1`, keeping `INF` exclusive.
///
/// # Panics
///
/// Panics if no subset contains a front.
#[must_use]
pub fn evaluate_additive<F>(
    subsets: &[Vec<&ParetoFront>],
    objective: F,
    aggregate: Aggregate,
    g: i32,
    bound: i32,
) -> i32
where
    F: Fn(i32, i32) -> f64,
{
    let remaining = bound.saturating_sub(g);
    let mut values = Vec::with_capacity(subsets.len());
    for subset in subsets {
        if subset.is_empty() {
            continue;
        }
        let composed = merge_all(subset, remaining);
        let Some(best) = composed.min_pair(&objective) else {
            return INF;
        };
        let min_objective = objective(best.h, best.d);
        if min_objective.is_infinite() {
            return INF;
        }
        values.push(min_objective);
    }
    assert!(!values.is_empty(), "no non-empty subset to evaluate");

    let agg = aggregate.apply(&values).round();
    if agg < f64::from(INF) {
        agg as i32
    } else {
        INF - 1
    }
}
