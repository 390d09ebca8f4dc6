//! End-to-end scenarios across the three crates.

use cairn_distances::Distances;
use cairn_front::{evaluate_additive, Aggregate, ObjectiveKind, INF};
use scenario_tests::graph_of;

#[test]
fn two_state_graph_with_isolated_addition() {
    // 2-state graph, edge 0 →(3) 1, initial 0, goal {1}, unbounded.
    let mut distances = Distances::unbounded(graph_of(2, &[(0, 1, 3)], 0, &[1]));
    let prunable = distances.compute_distances();
    assert_eq!(prunable, vec![false, false]);
    assert_eq!(distances.get_init_distance(1), 3);
    assert_eq!(distances.get_goal_distance(0), 3);

    // Adding an isolated state 2 makes it prunable with INF distances.
    let mut distances = Distances::unbounded(graph_of(3, &[(0, 1, 3)], 0, &[1]));
    let prunable = distances.compute_distances();
    assert_eq!(prunable, vec![false, false, true]);
    assert_eq!(distances.get_init_distance(2), INF);
}

#[test]
fn recompute_after_queries_is_idempotent() {
    let mut distances = Distances::unbounded(graph_of(
        4,
        &[(0, 1, 1), (0, 2, 4), (1, 3, 4), (2, 3, 1)],
        0,
        &[3],
    ));
    let _ = distances.compute_distances();
    distances.compute_backward_pareto_fronts();
    let front_before = distances.get_backward_pareto_front(0).clone();

    // A second Pareto request must leave the fronts untouched.
    distances.compute_backward_pareto_fronts();
    assert_eq!(
        distances.get_backward_pareto_front(0).pairs(),
        front_before.pairs()
    );
}

#[test]
fn bounded_distances_prune_expensive_states() {
    // Cheapest full path through 1 costs 5; through 2 costs 5 as well via
    // a different split. Bound 4 makes the goal unreachable.
    let edges = &[(0, 1, 1), (1, 3, 4), (0, 2, 4), (2, 3, 1)];
    let mut bounded = Distances::new(graph_of(4, edges, 0, &[3]), 4);
    let prunable = bounded.compute_distances();

    assert_eq!(
        prunable,
        vec![true, true, true, true],
        "no state lies on a within-bound full path, not even the initial one"
    );

    let mut loose = Distances::new(graph_of(4, edges, 0, &[3]), 5);
    let prunable = loose.compute_distances();
    assert_eq!(prunable, vec![false, false, false, false]);
    assert_eq!(loose.get_init_distance(3), 5);
}

#[test]
fn backward_fronts_feed_additive_evaluation() {
    // Two independent graphs standing in for disjoint abstractions.
    let mut left = Distances::unbounded(graph_of(
        3,
        &[(0, 1, 1), (1, 2, 1), (0, 2, 5)],
        0,
        &[2],
    ));
    let _ = left.compute_distances();
    left.compute_backward_pareto_fronts();

    let mut right = Distances::unbounded(graph_of(2, &[(0, 1, 2)], 0, &[1]));
    let _ = right.compute_distances();
    right.compute_backward_pareto_fronts();

    let subsets = [vec![
        left.get_backward_pareto_front(0),
        right.get_backward_pareto_front(0),
    ]];

    let cost = ObjectiveKind::Cost.build(0, 20, 1.0);
    assert_eq!(
        evaluate_additive(&subsets, &*cost, Aggregate::Sum, 0, 20),
        4,
        "cheapest combined cost is 2 + 2"
    );

    let depth = ObjectiveKind::Depth.build(0, 20, 1.0);
    assert_eq!(
        evaluate_additive(&subsets, &*depth, Aggregate::Sum, 0, 20),
        2,
        "shallowest combination is one step in each graph"
    );

    // Under a tight shared bound the expensive-shallow route is gone.
    assert_eq!(
        evaluate_additive(&subsets, &*depth, Aggregate::Sum, 0, 4),
        3,
        "bound 4 forces the cheap two-step route on the left"
    );

    assert_eq!(
        evaluate_additive(&subsets, &*cost, Aggregate::Sum, 0, 3),
        INF,
        "no combination fits under bound 3"
    );
}
