//! Shared fixtures for the cairn benchmark suites.

#![forbid(unsafe_code)]

use cairn_distances::{LabeledTransition, TransitionGraph};
use cairn_front::{ParetoFront, ParetoPair};

/// A staircase front of `len` pairs with cost stride `stride`.
///
/// # Panics
///
/// Panics on a degenerate shape (zero length or stride).
#[must_use]
pub fn staircase_front(len: i32, stride: i32) -> ParetoFront {
    assert!(len > 0 && stride > 0, "degenerate staircase shape");
    let mut front = ParetoFront::new();
    for i in 0..len {
        let appended = front.append_pair(ParetoPair::new(i * stride, len - 1 - i));
        assert!(appended, "staircase construction must stay appendable");
    }
    front
}

/// A `width` x `height` grid with unit steps right and down, plus express
/// edges that skip two columns at cost 3 — shallower but more expensive, so
/// per-state frontiers carry genuine cost/depth trade-offs. The initial
/// state is the top-left corner, the single goal the bottom-right one.
///
/// # Panics
///
/// Panics on an empty grid.
#[must_use]
pub fn grid_graph(width: usize, height: usize) -> TransitionGraph {
    assert!(width > 0 && height > 0, "empty grid");
    let at = |row: usize, col: usize| row * width + col;
    let mut transitions = Vec::new();
    let mut label = 0;
    let mut push = |src: usize, target: usize, cost: i32| {
        transitions.push(LabeledTransition::new(label, cost, src, target));
        label += 1;
    };
    for row in 0..height {
        for col in 0..width {
            if col + 1 < width {
                push(at(row, col), at(row, col + 1), 1);
            }
            if row + 1 < height {
                push(at(row, col), at(row + 1, col), 1);
            }
            if col + 2 < width {
                push(at(row, col), at(row, col + 2), 3);
            }
        }
    }
    let num_states = width * height;
    let mut goal_states = vec![false; num_states];
    goal_states[num_states - 1] = true;
    TransitionGraph::new(num_states, transitions, 0, goal_states)
}

/// Equivalence classes that keep every grid state in its own class, in
/// order. Trivially f-preserving: exercises the incremental copy path of
/// `apply_abstraction` without changing any distance.
#[must_use]
pub fn identity_classes(num_states: usize) -> Vec<Vec<usize>> {
    (0..num_states).map(|state| vec![state]).collect()
}
