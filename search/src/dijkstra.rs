//! The bidirectional multi-objective search engine.
//!
//! One `DijkstraSearch` owns two independent sides (forward and backward),
//! each initialized once with a transition function and a seed set, and
//! computed to one of two levels: `Ordinary` establishes only the min-cost
//! pair per state, `Pareto` the full non-dominated frontier. A Pareto pass
//! over an ordinary-computed side reseeds from the stored min-cost pairs
//! instead of re-exploring the cheapest paths, and either pass tightens its
//! admission bound with the opposite side's min costs once those exist.

use cairn_front::{ParetoFront, ParetoPair, INF};

use crate::queue::LexQueue;

/// One (neighbor, edge cost) transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    /// Neighbor state index.
    pub state: usize,
    /// Non-negative transition cost.
    pub cost: i32,
}

impl Successor {
    /// Construct a successor record.
    #[must_use]
    pub fn new(state: usize, cost: i32) -> Self {
        Self { state, cost }
    }
}

/// The injected transition capability: state index to its finite successor
/// list. Must be pure and stable for the lifetime of one initialization.
pub type TransitionFn = Box<dyn Fn(usize) -> Vec<Successor>>;

/// Search direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Along outgoing edges, seeded from the initial state.
    Forward,
    /// Along incoming edges, seeded from the goal states.
    Backward,
}

impl Direction {
    /// The other direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Compute level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Establish only the min-cost pair per state.
    Ordinary,
    /// Establish the full non-dominated frontier per state.
    Pareto,
}

/// Per-direction search state.
#[derive(Default)]
struct SearchSide {
    transitions: Option<TransitionFn>,
    seeds: Vec<usize>,
    fronts: Vec<ParetoFront>,
    ordinary: bool,
    pareto: bool,
}

impl SearchSide {
    fn is_init(&self) -> bool {
        self.transitions.is_some()
    }
}

/// Bidirectional, lexicographically ordered, cost-bounded multi-source
/// search producing one [`ParetoFront`] per state per direction.
pub struct DijkstraSearch {
    bound: i32,
    forward: SearchSide,
    backward: SearchSide,
}

impl DijkstraSearch {
    /// Create a search with a global cost bound: no pair with `h > bound`
    /// is ever created, enqueued, or retained.
    #[must_use]
    pub fn new(bound: i32) -> Self {
        assert!(bound >= 0, "cost bound must be non-negative");
        Self {
            bound,
            forward: SearchSide::default(),
            backward: SearchSide::default(),
        }
    }

    /// Create an unbounded search (`bound = INF`).
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(INF)
    }

    /// The global cost bound.
    #[must_use]
    pub fn bound(&self) -> i32 {
        self.bound
    }

    /// Whether a finite bound is in effect.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.bound < INF
    }

    fn side(&self, dir: Direction) -> &SearchSide {
        match dir {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }

    /// The side for `dir` mutably, plus the opposite side for reading.
    fn side_and_opposite_mut(&mut self, dir: Direction) -> (&mut SearchSide, &SearchSide) {
        match dir {
            Direction::Forward => (&mut self.forward, &self.backward),
            Direction::Backward => (&mut self.backward, &self.forward),
        }
    }

    /// Whether `init` has been called for `dir`.
    #[must_use]
    pub fn is_init(&self, dir: Direction) -> bool {
        self.side(dir).is_init()
    }

    /// Whether `dir` has been computed at least to level `alg`.
    #[must_use]
    pub fn is_computed(&self, dir: Direction, alg: Algorithm) -> bool {
        let side = self.side(dir);
        match alg {
            Algorithm::Ordinary => side.ordinary,
            Algorithm::Pareto => side.pareto,
        }
    }

    /// Record the transition function and seed set for `dir` and allocate
    /// one empty front per state. Overwrites any previous initialization
    /// and resets both completion flags.
    pub fn init(
        &mut self,
        dir: Direction,
        transitions: TransitionFn,
        seeds: Vec<usize>,
        num_states: usize,
    ) {
        let (side, _) = self.side_and_opposite_mut(dir);
        side.transitions = Some(transitions);
        side.seeds = seeds;
        side.fronts = vec![ParetoFront::new(); num_states];
        side.ordinary = false;
        side.pareto = false;
    }

    /// Run the search for `dir` at level `alg`. No-op when already
    /// satisfied at that level.
    ///
    /// # Panics
    ///
    /// Panics if `dir` has not been initialized.
    pub fn compute(&mut self, dir: Direction, alg: Algorithm) {
        assert!(self.is_init(dir), "compute({dir:?}) before init");
        if self.is_computed(dir, alg) {
            return;
        }

        let bound = self.bound;
        let (side, opposite) = self.side_and_opposite_mut(dir);
        let Some(transitions) = side.transitions.as_ref() else {
            unreachable!("is_init checked above");
        };

        // Meet-in-the-middle: once the opposite direction's min costs
        // exist, a candidate only fits if its cost plus the opposite-side
        // remaining cost stays under the bound.
        let opposite_fronts = opposite.ordinary.then_some(opposite.fronts.as_slice());

        let mut queue = LexQueue::new();
        if side.ordinary {
            // Reseed from the ordinary result rather than re-exploring the
            // cheapest paths: every settled min-cost pair re-expands once.
            for (state, front) in side.fronts.iter().enumerate() {
                if !front.is_empty() {
                    expand(
                        state,
                        front.min_h_pair(),
                        &mut queue,
                        transitions,
                        &side.fronts,
                        opposite_fronts,
                        bound,
                    );
                }
            }
        } else {
            for &seed in &side.seeds {
                queue.push(ParetoPair::new(0, 0), seed);
            }
        }

        while let Some((pair, state)) = queue.pop() {
            let accepted = (side.fronts[state].is_empty() || alg == Algorithm::Pareto)
                && side.fronts[state].append_pair(pair);
            if accepted {
                expand(
                    state,
                    pair,
                    &mut queue,
                    transitions,
                    &side.fronts,
                    opposite_fronts,
                    bound,
                );
            }
        }

        side.ordinary = true;
        if alg == Algorithm::Pareto {
            side.pareto = true;
        }
    }

    /// Discard all fronts and both completion flags for `dir`, returning it
    /// to its freshly initialized state.
    pub fn clear(&mut self, dir: Direction) {
        let (side, _) = self.side_and_opposite_mut(dir);
        let num_states = side.fronts.len();
        side.fronts = vec![ParetoFront::new(); num_states];
        side.ordinary = false;
        side.pareto = false;
    }

    /// Bulk-overwrite all per-state fronts for `dir`, clearing both
    /// completion flags. The caller is responsible for the soundness of the
    /// replacement.
    ///
    /// # Panics
    ///
    /// Panics if `dir` has not been initialized.
    pub fn set_values(&mut self, dir: Direction, fronts: Vec<ParetoFront>) {
        assert!(self.is_init(dir), "set_values({dir:?}) before init");
        let (side, _) = self.side_and_opposite_mut(dir);
        side.fronts = fronts;
        side.ordinary = false;
        side.pareto = false;
    }

    /// Number of states allocated for `dir`.
    #[must_use]
    pub fn num_states(&self, dir: Direction) -> usize {
        self.side(dir).fronts.len()
    }

    /// Min cost of `state` in `dir`, or `INF` if unreached.
    ///
    /// # Panics
    ///
    /// Panics if `dir` has not been initialized.
    #[must_use]
    pub fn get_value(&self, dir: Direction, state: usize) -> i32 {
        assert!(self.is_init(dir), "get_value({dir:?}) before init");
        self.side(dir).fronts[state].min_h_pair().h
    }

    /// The stored front for `state` in `dir`.
    ///
    /// # Panics
    ///
    /// Panics if `dir` has not been initialized.
    #[must_use]
    pub fn pareto_front(&self, dir: Direction, state: usize) -> &ParetoFront {
        assert!(self.is_init(dir), "pareto_front({dir:?}) before init");
        &self.side(dir).fronts[state]
    }

    /// The stored front for `state` in `dir`, mutably. The borrow is
    /// invalidated by any subsequent mutating call on this search.
    ///
    /// # Panics
    ///
    /// Panics if `dir` has not been initialized.
    #[must_use]
    pub fn pareto_front_mut(&mut self, dir: Direction, state: usize) -> &mut ParetoFront {
        assert!(self.is_init(dir), "pareto_front({dir:?}) before init");
        match dir {
            Direction::Forward => &mut self.forward.fronts[state],
            Direction::Backward => &mut self.backward.fronts[state],
        }
    }
}

/// Expand `state` at `pair`: enqueue every successor candidate that fits
/// the effective bound and would extend its target's staircase.
///
/// The effective bound is recomputed here rather than cached, because the
/// opposite side's status can change between successive `compute` calls on
/// different directions.
fn expand(
    state: usize,
    pair: ParetoPair,
    queue: &mut LexQueue,
    transitions: &TransitionFn,
    fronts: &[ParetoFront],
    opposite_fronts: Option<&[ParetoFront]>,
    bound: i32,
) {
    for succ in transitions(state) {
        let candidate = ParetoPair::new(
            pair.h.saturating_add(succ.cost),
            pair.d.saturating_add(1),
        );
        let effective_bound = match opposite_fronts {
            Some(opp) => i64::from(bound) - i64::from(opp[succ.state].min_h_pair().h),
            None => i64::from(bound),
        };
        if i64::from(candidate.h) <= effective_bound && fronts[succ.state].is_appendable(candidate)
        {
            queue.push(candidate, succ.state);
        }
    }
}
