//! The non-dominated staircase container.
//!
//! One container serves both construction modes: the incremental
//! `append_pair` path used live during search (pairs arrive in
//! non-decreasing `h`, the container stays sorted at all times) and the bulk
//! `insert_pair` + `sort` path used for presorted post-hoc fronts. Query and
//! dominance logic is shared; bulk mode tracks sortedness in a flag and the
//! queries `debug_assert!` it.

use crate::pair::{ParetoPair, INF};

/// An ordered sequence of mutually non-dominated [`ParetoPair`]s.
///
/// Invariant (once sorted): strictly increasing `h` and strictly decreasing
/// `d` across the sequence — the monotone staircase of a dominance-free
/// frontier over two jointly minimized objectives.
#[derive(Debug, Clone)]
pub struct ParetoFront {
    pairs: Vec<ParetoPair>,
    sorted: bool,
}

impl Default for ParetoFront {
    fn default() -> Self {
        Self::new()
    }
}

impl ParetoFront {
    /// Create an empty front.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            sorted: true,
        }
    }

    /// Whether the front holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs on the front.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// The pairs in staircase order.
    #[must_use]
    pub fn pairs(&self) -> &[ParetoPair] {
        &self.pairs
    }

    /// Drop all pairs, returning the front to its freshly constructed state.
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.sorted = true;
    }

    /// Whether `p` would extend the staircase.
    ///
    /// True iff the front is empty, or the current min-d (last) pair has
    /// strictly greater depth and no greater cost than `p`. During a single
    /// search pass pairs are offered in non-decreasing `h`, so comparing
    /// against the last entry alone tests non-domination against the whole
    /// front.
    #[must_use]
    pub fn is_appendable(&self, p: ParetoPair) -> bool {
        match self.pairs.last() {
            None => true,
            Some(last) => last.d > p.d && last.h <= p.h,
        }
    }

    /// Append `p` if it extends the staircase; returns whether it was taken.
    ///
    /// When `p` matches the last entry's cost exactly, the entry's depth is
    /// overwritten instead of growing the front — only the smallest depth
    /// per cost is kept. This is the only construction path during live
    /// search.
    pub fn append_pair(&mut self, p: ParetoPair) -> bool {
        debug_assert!(self.sorted, "append_pair on an unsorted bulk front");
        if !self.is_appendable(p) {
            return false;
        }
        match self.pairs.last_mut() {
            Some(last) if last.h == p.h => last.d = p.d,
            _ => self.pairs.push(p),
        }
        true
    }

    /// Bulk insertion: push without dominance checks.
    ///
    /// For efficiency, pairs should arrive in decreasing `d` (equivalently
    /// increasing `h`); otherwise [`ParetoFront::sort`] must be called
    /// before any query. The caller is responsible for only inserting
    /// mutually non-dominated pairs.
    pub fn insert_pair(&mut self, p: ParetoPair) {
        if let Some(last) = self.pairs.last() {
            if p < *last {
                self.sorted = false;
            }
        }
        self.pairs.push(p);
    }

    /// Bulk insertion by components. See [`ParetoFront::insert_pair`].
    pub fn insert(&mut self, h: i32, d: i32) {
        self.insert_pair(ParetoPair::new(h, d));
    }

    /// Restore staircase order after out-of-order bulk insertion.
    pub fn sort(&mut self) {
        self.pairs.sort_unstable();
        self.sorted = true;
    }

    /// Whether the pairs are currently in staircase order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// The cheapest pair (first entry), or `(INF, INF)` if empty.
    #[must_use]
    pub fn min_h_pair(&self) -> ParetoPair {
        debug_assert!(self.sorted, "query on an unsorted bulk front");
        self.pairs.first().copied().unwrap_or_else(ParetoPair::unreachable)
    }

    /// The shallowest pair (last entry), or `(INF, INF)` if empty.
    ///
    /// Note that the front may have been constructed under a cost bound, in
    /// which case the true unbounded min-depth pair may never have been
    /// inserted.
    #[must_use]
    pub fn min_d_pair(&self) -> ParetoPair {
        debug_assert!(self.sorted, "query on an unsorted bulk front");
        self.pairs.last().copied().unwrap_or_else(ParetoPair::unreachable)
    }

    /// The pair minimizing `d` subject to `g + h <= bound`, or `None` when
    /// nothing on the front fits.
    #[must_use]
    pub fn min_d_pair_within(&self, g: i32, bound: i32) -> Option<ParetoPair> {
        debug_assert!(self.sorted, "query on an unsorted bulk front");
        let fits = |p: &ParetoPair| i64::from(g) + i64::from(p.h) <= i64::from(bound);
        self.pairs.iter().rev().find(|p| fits(p)).copied()
    }

    /// The pair minimizing `(g + h) * d` subject to `g + h <= bound`, ties
    /// broken by lower `d`. `None` when nothing on the front fits.
    #[must_use]
    pub fn min_f_weighted_pair(&self, g: i32, bound: i32) -> Option<ParetoPair> {
        debug_assert!(self.sorted, "query on an unsorted bulk front");
        let g = i64::from(g);
        let mut best: Option<(i64, ParetoPair)> = None;
        for p in &self.pairs {
            if g + i64::from(p.h) > i64::from(bound) {
                break;
            }
            let fd = (g + i64::from(p.h)) * i64::from(p.d);
            let better = match best {
                None => true,
                Some((best_fd, best_p)) => fd < best_fd || (fd == best_fd && p.d < best_p.d),
            };
            if better {
                best = Some((fd, *p));
            }
        }
        best.map(|(_, p)| p)
    }

    /// The pair minimizing a caller-supplied scalarization of `(h, d)`.
    ///
    /// A linear scan; lets one computed front serve many cost/depth/
    /// potential objectives without re-searching. `None` when empty.
    #[must_use]
    pub fn min_pair<F>(&self, objective: F) -> Option<ParetoPair>
    where
        F: Fn(i32, i32) -> f64,
    {
        debug_assert!(self.sorted, "query on an unsorted bulk front");
        let mut best: Option<(f64, ParetoPair)> = None;
        for p in &self.pairs {
            let obj = objective(p.h, p.d);
            match best {
                Some((best_obj, _)) if obj >= best_obj => {}
                _ => best = Some((obj, *p)),
            }
        }
        best.map(|(_, p)| p)
    }

    /// Drop every pair with `h > bound`.
    ///
    /// The front is `h`-ascending, so this is a suffix trim from the first
    /// violating entry.
    pub fn prune_with_bound(&mut self, bound: i32) {
        debug_assert!(self.sorted, "prune on an unsorted bulk front");
        if let Some(cut) = self.pairs.iter().position(|p| p.h > bound) {
            self.pairs.truncate(cut);
        }
    }

    /// Replace `self` with the Pareto-minimal staircase of
    /// `{a + b : a ∈ self, b ∈ other, a.h + b.h <= bound}`.
    ///
    /// Singleton operands reduce to an O(n) translate-and-truncate. The
    /// general case runs the bucketed DP over combined depths: a dense
    /// array indexed by depth offset holds the cheapest combined cost per
    /// depth, then an ascending-depth scan keeps exactly the entries whose
    /// cost strictly improves on every shallower one.
    pub fn merge_additive(&mut self, other: &ParetoFront, bound: i32) {
        debug_assert!(self.sorted && other.sorted, "merge of unsorted fronts");
        if self.pairs.is_empty() || other.pairs.is_empty() {
            self.clear();
            return;
        }

        // Translate-and-truncate when either operand is a singleton.
        if self.pairs.len() == 1 {
            let base = self.pairs[0];
            self.pairs.clear();
            for &b in &other.pairs {
                let p = base + b;
                if p.h > bound {
                    break;
                }
                self.pairs.push(p);
            }
            return;
        }
        let other_min_h = other.min_h_pair();
        if other.pairs.len() == 1 {
            if let Some(cut) = self
                .pairs
                .iter()
                .position(|a| (*a + other_min_h).h > bound)
            {
                self.pairs.truncate(cut);
            }
            for a in &mut self.pairs {
                *a += other_min_h;
            }
            return;
        }

        // Bucketed DP over combined depths. Combined depth ranges from the
        // sum of min-d depths to the sum of min-h depths; one bucket per
        // value, initialized past the bound.
        let min_d = self.min_d_pair().d + other.min_d_pair().d;
        let max_d = self.min_h_pair().d + other_min_h.d;
        let cutoff = bound.saturating_add(1);
        let mut cheapest = vec![cutoff; (max_d - min_d + 1) as usize];

        for &a in &self.pairs {
            // Both operands are h-ascending: once even the cheapest partner
            // busts the bound, every later a does too.
            if i64::from(a.h) + i64::from(other_min_h.h) > i64::from(bound) {
                break;
            }
            for &b in &other.pairs {
                let h = i64::from(a.h) + i64::from(b.h);
                if h > i64::from(bound) {
                    break;
                }
                let h = h as i32;
                let slot = (a.d + b.d - min_d) as usize;
                if h < cheapest[slot] {
                    cheapest[slot] = h;
                }
            }
        }

        // Ascending-depth scan keeps an entry only when its cost strictly
        // beats everything at lower depth; reversing yields ascending h.
        self.pairs.clear();
        let mut best_so_far = cutoff;
        for (offset, &h) in cheapest.iter().enumerate() {
            if h < best_so_far {
                best_so_far = h;
                self.pairs.push(ParetoPair::new(h, min_d + offset as i32));
            }
        }
        self.pairs.reverse();
    }
}
