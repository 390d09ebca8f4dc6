//! The distance orchestrator.
//!
//! `Distances` owns one [`TransitionGraph`] and one
//! [`cairn_search::DijkstraSearch`], derives the two transition functions,
//! runs the bidirectional computation, classifies states, caches the scalar
//! summaries `max_f`/`max_g`/`max_h`, and keeps everything consistent across
//! abstraction steps.

use cairn_front::{ParetoFront, INF};
use cairn_search::{Algorithm, DijkstraSearch, Direction};
use serde_json::Value;

use crate::graph::TransitionGraph;

/// Multi-criteria distance information for one transition graph.
pub struct Distances {
    graph: TransitionGraph,
    search: DijkstraSearch,
    distances_computed: bool,
    max_f: Option<i32>,
    max_g: Option<i32>,
    max_h: Option<i32>,
}

impl Distances {
    /// Wrap a graph with a global cost bound.
    #[must_use]
    pub fn new(graph: TransitionGraph, bound: i32) -> Self {
        Self {
            graph,
            search: DijkstraSearch::new(bound),
            distances_computed: false,
            max_f: None,
            max_g: None,
            max_h: None,
        }
    }

    /// Wrap a graph with no cost bound.
    #[must_use]
    pub fn unbounded(graph: TransitionGraph) -> Self {
        Self::new(graph, INF)
    }

    /// The wrapped graph.
    #[must_use]
    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    fn num_states(&self) -> usize {
        self.graph.num_states()
    }

    /// Whether `compute_distances` has run (and survived any abstractions).
    #[must_use]
    pub fn are_distances_computed(&self) -> bool {
        self.distances_computed
    }

    /// Whether the full backward frontiers have been established.
    #[must_use]
    pub fn are_backward_pareto_fronts_computed(&self) -> bool {
        self.search.is_computed(Direction::Backward, Algorithm::Pareto)
    }

    fn clear_distances(&mut self) {
        self.distances_computed = false;
        self.max_f = None;
        self.max_g = None;
        self.max_h = None;
        self.search.clear(Direction::Forward);
        self.search.clear(Direction::Backward);
    }

    /// Compute min-cost distances in both directions and classify states.
    ///
    /// Returns one flag per state: `true` when the state is prunable
    /// because it is unreachable (forward cost `INF`) or irrelevant
    /// (backward cost `INF`). Also records `max_f`/`max_g`/`max_h` over the
    /// live states. A zero-state graph yields an empty flag vector and
    /// `INF` summaries.
    ///
    /// # Panics
    ///
    /// Panics if distances are already computed — recomputation requires an
    /// abstraction or an explicit rebuild, never a silent overwrite.
    pub fn compute_distances(&mut self) -> Vec<bool> {
        assert!(
            !self.distances_computed,
            "compute_distances called twice without a clear"
        );

        let num_states = self.num_states();
        if num_states == 0 {
            self.max_f = Some(INF);
            self.max_g = Some(INF);
            self.max_h = Some(INF);
            self.distances_computed = true;
            return Vec::new();
        }

        self.search.init(
            Direction::Forward,
            self.graph.successors(),
            vec![self.graph.init_state()],
            num_states,
        );
        self.search.init(
            Direction::Backward,
            self.graph.predecessors(),
            self.graph.goal_states(),
            num_states,
        );
        self.search.compute(Direction::Forward, Algorithm::Ordinary);
        self.search.compute(Direction::Backward, Algorithm::Ordinary);

        let mut max_f = 0;
        let mut max_g = 0;
        let mut max_h = 0;
        let mut prunable = vec![false; num_states];
        for (state, flag) in prunable.iter_mut().enumerate() {
            let g = self.search.get_value(Direction::Forward, state);
            let h = self.search.get_value(Direction::Backward, state);
            // States both unreachable and irrelevant count as unreachable.
            if g == INF || h == INF {
                *flag = true;
            } else {
                max_f = max_f.max(g + h);
                max_g = max_g.max(g);
                max_h = max_h.max(h);
            }
        }
        self.max_f = Some(max_f);
        self.max_g = Some(max_g);
        self.max_h = Some(max_h);
        self.distances_computed = true;
        prunable
    }

    /// Establish the full backward frontiers (needed when a consumer wants
    /// more than the minimum cost).
    ///
    /// Reuses the ordinary backward result as seeds when the engine has
    /// established one. Otherwise — first call, or fronts installed by an
    /// abstraction copy, which are ordinary-level only — the backward
    /// direction is re-initialized from the current graph and searched
    /// from scratch.
    pub fn compute_backward_pareto_fronts(&mut self) {
        if self.are_backward_pareto_fronts_computed() {
            return;
        }
        if !self.search.is_computed(Direction::Backward, Algorithm::Ordinary) {
            self.search.init(
                Direction::Backward,
                self.graph.predecessors(),
                self.graph.goal_states(),
                self.num_states(),
            );
        }
        self.search.compute(Direction::Backward, Algorithm::Pareto);
    }

    /// Cost of reaching `state` from the initial state, or `INF`.
    #[must_use]
    pub fn get_init_distance(&self, state: usize) -> i32 {
        self.search.get_value(Direction::Forward, state)
    }

    /// Cost of reaching a goal from `state`, or `INF`.
    #[must_use]
    pub fn get_goal_distance(&self, state: usize) -> i32 {
        self.search.get_value(Direction::Backward, state)
    }

    /// The backward frontier of `state`.
    #[must_use]
    pub fn get_backward_pareto_front(&self, state: usize) -> &ParetoFront {
        self.search.pareto_front(Direction::Backward, state)
    }

    /// Largest `g + h` over live states.
    ///
    /// # Panics
    ///
    /// Panics before `compute_distances`.
    #[must_use]
    pub fn max_f(&self) -> i32 {
        self.max_f.expect("max_f queried before compute_distances")
    }

    /// Largest forward cost over live states.
    ///
    /// # Panics
    ///
    /// Panics before `compute_distances`.
    #[must_use]
    pub fn max_g(&self) -> i32 {
        self.max_g.expect("max_g queried before compute_distances")
    }

    /// Largest backward cost over live states.
    ///
    /// # Panics
    ///
    /// Panics before `compute_distances`.
    #[must_use]
    pub fn max_h(&self) -> i32 {
        self.max_h.expect("max_h queried before compute_distances")
    }

    /// Whether some goal is reachable from the initial state.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.num_states() > 0 && self.get_goal_distance(self.graph.init_state()) < INF
    }

    /// Update distances according to an abstraction of the state space.
    ///
    /// Each class adopts its first member as representative and copies the
    /// representative's forward/backward fronts — valid only if every
    /// member's forward and backward min costs equal the representative's.
    /// If any class fails this f-preserving check, the incremental update
    /// is abandoned entirely and distances are recomputed from scratch on
    /// the abstracted graph; partial reuse is never attempted.
    ///
    /// Dropping states is OK, but only unreachable or irrelevant states
    /// may be dropped — otherwise stale distance information goes
    /// undetected.
    ///
    /// # Panics
    ///
    /// Panics if distances are not computed or a class is empty.
    pub fn apply_abstraction(&mut self, classes: &[Vec<usize>]) {
        assert!(
            self.distances_computed,
            "apply_abstraction before compute_distances"
        );

        let mut new_forward = Vec::with_capacity(classes.len());
        let mut new_backward = Vec::with_capacity(classes.len());
        let mut must_recompute = false;
        'classes: for class in classes {
            assert!(!class.is_empty(), "empty equivalence class");
            let representative = class[0];
            let forward = self
                .search
                .pareto_front(Direction::Forward, representative)
                .clone();
            let backward = self
                .search
                .pareto_front(Direction::Backward, representative)
                .clone();
            for &member in class {
                if self.search.get_value(Direction::Forward, member) != forward.min_h_pair().h
                    || self.search.get_value(Direction::Backward, member)
                        != backward.min_h_pair().h
                {
                    must_recompute = true;
                    break 'classes;
                }
            }
            new_forward.push(forward);
            new_backward.push(backward);
        }

        self.graph.apply_abstraction(classes);
        if must_recompute {
            self.clear_distances();
            let _ = self.compute_distances();
        } else {
            // Re-derive both directions from the abstracted graph so the
            // engine's transition functions, seeds, and state count match
            // the copied fronts; then install the copies.
            self.search.init(
                Direction::Forward,
                self.graph.successors(),
                vec![self.graph.init_state()],
                classes.len(),
            );
            self.search.init(
                Direction::Backward,
                self.graph.predecessors(),
                self.graph.goal_states(),
                classes.len(),
            );
            self.search.set_values(Direction::Forward, new_forward);
            self.search.set_values(Direction::Backward, new_backward);
            // f-preserving: the cached max summaries stay valid.
        }
    }

    /// Structured summary of the computation, keyed alphabetically.
    #[must_use]
    pub fn statistics(&self) -> Value {
        let (init_h, solvable) = if self.distances_computed && self.num_states() > 0 {
            (
                cost_to_json(self.get_goal_distance(self.graph.init_state())),
                Value::from(self.is_solvable()),
            )
        } else {
            (Value::Null, Value::Null)
        };
        serde_json::json!({
            "bound": cost_to_json(self.search.bound()),
            "computed": self.distances_computed,
            "init_h": init_h,
            "max_f": self.max_f.map_or(Value::Null, cost_to_json),
            "max_g": self.max_g.map_or(Value::Null, cost_to_json),
            "max_h": self.max_h.map_or(Value::Null, cost_to_json),
            "num_states": self.num_states(),
            "solvable": solvable,
        })
    }

    /// Per-state goal distances (`null` for `INF`), index-aligned.
    #[must_use]
    pub fn dump_goal_distances(&self) -> Value {
        let distances: Vec<Value> = (0..self.num_states())
            .map(|state| cost_to_json(self.get_goal_distance(state)))
            .collect();
        Value::from(distances)
    }
}

/// `INF` serializes as `null`; finite costs as numbers.
fn cost_to_json(value: i32) -> Value {
    if value == INF {
        Value::Null
    } else {
        Value::from(value)
    }
}
