//! The (cost, depth) value type.

use std::ops::{Add, AddAssign};

/// Sentinel for "unreachable or out of bound".
///
/// `INF` is the exclusive carrier of that meaning: accumulated costs never
/// reach it (addition saturates), and downstream aggregation clamps any
/// computed value at `INF - 1`.
pub const INF: i32 = i32::MAX;

/// A (cost, depth) pair.
///
/// Ordering is lexicographic on `(h, d)` — derived `Ord` with `h` declared
/// first gives exactly that. Dominance is the separate partial order tested
/// by [`ParetoPair::dominates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParetoPair {
    /// Accumulated path cost.
    pub h: i32,
    /// Accumulated path depth (transition count).
    pub d: i32,
}

impl ParetoPair {
    /// Construct a pair from non-negative cost and depth.
    #[must_use]
    pub fn new(h: i32, d: i32) -> Self {
        Self { h, d }
    }

    /// The empty-front sentinel `(INF, INF)`.
    #[must_use]
    pub fn unreachable() -> Self {
        Self { h: INF, d: INF }
    }

    /// Pareto domination: at least as good in both dimensions, strictly
    /// better in at least one.
    #[must_use]
    pub fn dominates(self, other: Self) -> bool {
        self.h <= other.h && self.d <= other.d && (self.h < other.h || self.d < other.d)
    }

    /// Normalized remaining room under `bound` after spending `g`, in [0, 1].
    ///
    /// Returns 0 when the pair cannot fit under the bound, 1 when its cost
    /// is zero, and `1 - h / (bound + 1 - g)` otherwise. Arithmetic is
    /// widened to `i64` so `bound = INF` cannot overflow.
    #[must_use]
    pub fn potential(self, g: i32, bound: i32) -> f64 {
        let h = i64::from(self.h);
        let room = i64::from(bound) - i64::from(g);
        if h > room {
            0.0
        } else if h == 0 {
            1.0
        } else {
            1.0 - (h as f64) / ((room + 1) as f64)
        }
    }
}

impl AddAssign for ParetoPair {
    /// Componentwise saturating sum: cost composition along an edge or
    /// across independently searched fronts. Saturation keeps `INF`
    /// absorbing instead of wrapping.
    fn add_assign(&mut self, other: Self) {
        self.h = self.h.saturating_add(other.h);
        self.d = self.d.saturating_add(other.d);
    }
}

impl Add for ParetoPair {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}
