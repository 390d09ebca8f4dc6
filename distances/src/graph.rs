//! The labeled transition graph supplied by the task-translation layer.

use cairn_search::{Successor, TransitionFn};

/// One costed labeled directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LabeledTransition {
    /// Label identifier shared by transitions induced by the same operator.
    pub label: u32,
    /// Non-negative transition cost.
    pub cost: i32,
    /// Source state index.
    pub src: usize,
    /// Target state index.
    pub target: usize,
}

impl LabeledTransition {
    /// Construct a transition record.
    #[must_use]
    pub fn new(label: u32, cost: i32, src: usize, target: usize) -> Self {
        Self {
            label,
            cost,
            src,
            target,
        }
    }
}

/// A transition graph: states `0..N-1`, costed labeled directed edges, one
/// designated initial state, a boolean goal predicate per state.
#[derive(Debug, Clone)]
pub struct TransitionGraph {
    num_states: usize,
    transitions: Vec<LabeledTransition>,
    init_state: usize,
    goal_states: Vec<bool>,
}

impl TransitionGraph {
    /// Construct and validate a graph.
    ///
    /// # Panics
    ///
    /// Panics on malformed input: a goal vector of the wrong length, an
    /// out-of-range initial state or edge endpoint, or a negative edge
    /// cost. Malformed graphs are programming errors, not runtime
    /// conditions.
    #[must_use]
    pub fn new(
        num_states: usize,
        transitions: Vec<LabeledTransition>,
        init_state: usize,
        goal_states: Vec<bool>,
    ) -> Self {
        assert_eq!(
            goal_states.len(),
            num_states,
            "goal predicate length must match the state count"
        );
        assert!(
            num_states == 0 || init_state < num_states,
            "initial state {init_state} out of range for {num_states} states"
        );
        for t in &transitions {
            assert!(
                t.src < num_states && t.target < num_states,
                "transition {t:?} references a state out of range"
            );
            assert!(t.cost >= 0, "transition {t:?} has a negative cost");
        }
        Self {
            num_states,
            transitions,
            init_state,
            goal_states,
        }
    }

    /// Number of states.
    #[must_use]
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// The designated initial state.
    #[must_use]
    pub fn init_state(&self) -> usize {
        self.init_state
    }

    /// Whether `state` satisfies the goal predicate.
    #[must_use]
    pub fn is_goal_state(&self, state: usize) -> bool {
        self.goal_states[state]
    }

    /// All goal states in ascending order.
    #[must_use]
    pub fn goal_states(&self) -> Vec<usize> {
        (0..self.num_states)
            .filter(|&s| self.goal_states[s])
            .collect()
    }

    /// The edge list.
    #[must_use]
    pub fn transitions(&self) -> &[LabeledTransition] {
        &self.transitions
    }

    /// The forward transition function: outgoing edges per state.
    ///
    /// Builds the dense adjacency once and move-captures it, so the
    /// returned function is pure and stable regardless of later graph
    /// mutation.
    #[must_use]
    pub fn successors(&self) -> TransitionFn {
        let mut adjacency = vec![Vec::new(); self.num_states];
        for t in &self.transitions {
            adjacency[t.src].push(Successor::new(t.target, t.cost));
        }
        Box::new(move |state| adjacency[state].clone())
    }

    /// The backward transition function: incoming edges per state.
    #[must_use]
    pub fn predecessors(&self) -> TransitionFn {
        let mut adjacency = vec![Vec::new(); self.num_states];
        for t in &self.transitions {
            adjacency[t.target].push(Successor::new(t.src, t.cost));
        }
        Box::new(move |state| adjacency[state].clone())
    }

    /// Rewrite the graph through a state equivalence relation: class `i`
    /// becomes new state `i`.
    ///
    /// States absent from every class are dropped along with their edges
    /// (legal only for unreachable or irrelevant states). Remapped
    /// duplicate edges collapse; a class is a goal iff any member was.
    ///
    /// # Panics
    ///
    /// Panics if the graph has no states, a class is empty, or the initial
    /// state is dropped.
    pub fn apply_abstraction(&mut self, classes: &[Vec<usize>]) {
        const DROPPED: usize = usize::MAX;
        assert!(self.num_states > 0, "abstraction of an empty graph");
        let mut map = vec![DROPPED; self.num_states];
        for (new_state, class) in classes.iter().enumerate() {
            assert!(!class.is_empty(), "empty equivalence class {new_state}");
            for &old_state in class {
                map[old_state] = new_state;
            }
        }
        assert!(
            map[self.init_state] != DROPPED,
            "abstraction dropped the initial state"
        );

        let goal_states = classes
            .iter()
            .map(|class| class.iter().any(|&s| self.goal_states[s]))
            .collect();

        let mut transitions: Vec<LabeledTransition> = self
            .transitions
            .iter()
            .filter(|t| map[t.src] != DROPPED && map[t.target] != DROPPED)
            .map(|t| LabeledTransition::new(t.label, t.cost, map[t.src], map[t.target]))
            .collect();
        transitions.sort_unstable();
        transitions.dedup();

        self.num_states = classes.len();
        self.transitions = transitions;
        self.init_state = map[self.init_state];
        self.goal_states = goal_states;
    }
}
