//! Scalarization objectives over a finished front.
//!
//! A front is computed once and then queried under many objectives via
//! [`crate::ParetoFront::min_pair`]. The objective builders here close over
//! the evaluation context `(g, bound, branching)` so the same kind can be
//! rebuilt cheaply per evaluated state.

use crate::pair::ParetoPair;

/// A boxed scalarization of `(h, d)`.
pub type Objective = Box<dyn Fn(i32, i32) -> f64>;

/// The built-in scalarization family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveKind {
    /// Minimize accumulated cost `h`.
    Cost,
    /// Minimize accumulated depth `d`.
    Depth,
    /// Minimize `1 / potential(g, bound)` — potential-time-scaled guidance.
    PotentialTimeScaled,
    /// Minimize `d^branching / potential(g, bound)` — expected remaining
    /// work under the observed branching behavior.
    ExpectedWork,
}

impl ObjectiveKind {
    /// Whether this objective needs [`ExpansionHistogram::branching_exponent`]
    /// as part of its context.
    #[must_use]
    pub fn needs_branching(self) -> bool {
        matches!(self, Self::ExpectedWork)
    }

    /// Build the objective for one evaluation: path cost `g` spent so far,
    /// the global cost `bound`, and the branching exponent (ignored unless
    /// [`ObjectiveKind::needs_branching`]).
    #[must_use]
    pub fn build(self, g: i32, bound: i32, branching: f64) -> Objective {
        match self {
            Self::Cost => Box::new(|h, _| f64::from(h)),
            Self::Depth => Box::new(|_, d| f64::from(d)),
            Self::PotentialTimeScaled => {
                Box::new(move |h, d| 1.0 / ParetoPair::new(h, d).potential(g, bound))
            }
            Self::ExpectedWork => Box::new(move |h, d| {
                f64::from(d).powf(branching) / ParetoPair::new(h, d).potential(g, bound)
            }),
        }
    }
}

/// Per-depth expansion counts backing the expected-work objective.
///
/// The histogram is explicit evaluation context owned by the caller, so
/// concurrent searches each carry their own counters instead of sharing a
/// process-wide table.
#[derive(Debug, Clone, Default)]
pub struct ExpansionHistogram {
    expanded: Vec<u64>,
}

impl ExpansionHistogram {
    /// Create an empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one expansion at `depth`.
    pub fn record(&mut self, depth: usize) {
        if self.expanded.len() <= depth {
            self.expanded.resize(depth + 1, 0);
        }
        self.expanded[depth] += 1;
    }

    /// Expansions recorded at `depth`.
    #[must_use]
    pub fn count_at(&self, depth: usize) -> u64 {
        self.expanded.get(depth).copied().unwrap_or(0)
    }

    /// The branching exponent `b` for the expected-work objective.
    ///
    /// Taken over every fully explored depth (all but the deepest recorded
    /// one): with `pre_jump` expansions across those depths and `max_u`
    /// the deepest of them, `b = pre_jump^(1/max_u)` — held at 1 until
    /// 10 000 expansions have accumulated, where the estimate is still
    /// noise.
    #[must_use]
    pub fn branching_exponent(&self) -> f64 {
        if self.expanded.len() < 2 {
            return 1.0;
        }
        let max_u = self.expanded.len() - 2;
        let pre_jump: u64 = self.expanded[..=max_u].iter().sum();
        if pre_jump < 10_000 || max_u == 0 {
            1.0
        } else {
            (pre_jump as f64).powf(1.0 / max_u as f64)
        }
    }
}
