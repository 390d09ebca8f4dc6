//! Abstraction updates cross-checked against from-scratch computation.

use cairn_distances::Distances;
use cairn_front::{ParetoPair, INF};
use scenario_tests::{graph_of, reference_dijkstra, reversed};

/// Every state's forward/backward cost must match an independent Dijkstra
/// over the abstracted edge list.
fn assert_distances_match(
    distances: &Distances,
    num_states: usize,
    edges: &[(usize, usize, i32)],
    init_state: usize,
    goals: &[usize],
) {
    let expected_g = reference_dijkstra(num_states, edges, &[init_state]);
    let expected_h = reference_dijkstra(num_states, &reversed(edges), goals);
    for state in 0..num_states {
        assert_eq!(
            distances.get_init_distance(state),
            expected_g[state],
            "forward cost of abstract state {state}"
        );
        assert_eq!(
            distances.get_goal_distance(state),
            expected_h[state],
            "backward cost of abstract state {state}"
        );
    }
}

#[test]
fn f_preserving_merge_keeps_all_distances() {
    // Two interchangeable middle states between 0 and 3.
    let mut distances = Distances::unbounded(graph_of(
        4,
        &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)],
        0,
        &[3],
    ));
    let _ = distances.compute_distances();

    distances.apply_abstraction(&[vec![0], vec![1, 2], vec![3]]);

    assert!(distances.are_distances_computed());
    assert_eq!(distances.graph().num_states(), 3);
    assert_distances_match(&distances, 3, &[(0, 1, 1), (1, 2, 1)], 0, &[2]);
    assert_eq!(distances.max_f(), 2, "summaries survive the front copy");
}

#[test]
fn non_f_preserving_merge_recomputes_from_scratch() {
    // Merging a near state with a far one changes its costs, so the copy
    // is abandoned and the abstracted graph is searched anew.
    let mut distances = Distances::unbounded(graph_of(
        4,
        &[(0, 1, 2), (1, 2, 3), (2, 3, 1)],
        0,
        &[3],
    ));
    let _ = distances.compute_distances();

    distances.apply_abstraction(&[vec![0], vec![1, 3], vec![2]]);

    assert!(distances.are_distances_computed());
    // Abstract edges: 0 →(2) 1, 1 →(3) 2, 2 →(1) 1, goal is the merged
    // class {1, 3}.
    assert_distances_match(
        &distances,
        3,
        &[(0, 1, 2), (1, 2, 3), (2, 1, 1)],
        0,
        &[1],
    );
}

#[test]
fn prunable_states_can_be_dropped() {
    let mut distances = Distances::unbounded(graph_of(3, &[(0, 1, 3)], 0, &[1]));
    let prunable = distances.compute_distances();
    assert_eq!(prunable, vec![false, false, true]);

    // State 2 appears in no class and is dropped from the graph.
    distances.apply_abstraction(&[vec![0], vec![1]]);

    assert_eq!(distances.graph().num_states(), 2);
    assert_distances_match(&distances, 2, &[(0, 1, 3)], 0, &[1]);
    assert_eq!(distances.max_f(), 3);
}

#[test]
fn chained_abstractions_stay_consistent() {
    let mut distances = Distances::unbounded(graph_of(
        5,
        &[(0, 1, 1), (0, 2, 1), (1, 3, 2), (2, 3, 2), (3, 4, 1)],
        0,
        &[4],
    ));
    let _ = distances.compute_distances();

    // First an f-preserving merge of the interchangeable middles, then a
    // non-f-preserving merge forcing a recompute.
    distances.apply_abstraction(&[vec![0], vec![1, 2], vec![3], vec![4]]);
    assert_distances_match(&distances, 4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1)], 0, &[3]);

    distances.apply_abstraction(&[vec![0, 1], vec![2], vec![3]]);
    // Merged {0, 1} has a self-loop of cost 1; cheapest goal path is 2 + 1.
    assert_distances_match(
        &distances,
        3,
        &[(0, 0, 1), (0, 1, 2), (1, 2, 1)],
        0,
        &[2],
    );
    assert_eq!(distances.get_goal_distance(0), 3);
}

#[test]
fn backward_fronts_are_rebuilt_on_the_abstracted_graph() {
    // f-preserving merge of the interchangeable middles; the merged graph
    // keeps both the cheap-deep and the expensive-shallow route to the
    // goal, so the rebuilt frontier has two entries.
    let mut distances = Distances::unbounded(graph_of(
        4,
        &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (0, 3, 5)],
        0,
        &[3],
    ));
    let _ = distances.compute_distances();
    distances.apply_abstraction(&[vec![0], vec![1, 2], vec![3]]);

    distances.compute_backward_pareto_fronts();
    assert!(distances.are_backward_pareto_fronts_computed());
    assert_eq!(
        distances.get_backward_pareto_front(0).pairs(),
        &[ParetoPair::new(2, 2), ParetoPair::new(5, 1)],
        "frontiers reflect the merged three-state graph"
    );

    // Recompute path: merging states at different distances, then the
    // same frontier request on the abstracted graph.
    let mut distances = Distances::unbounded(graph_of(
        4,
        &[(0, 1, 2), (1, 2, 3), (2, 3, 1)],
        0,
        &[3],
    ));
    let _ = distances.compute_distances();
    distances.apply_abstraction(&[vec![0], vec![1, 3], vec![2]]);

    distances.compute_backward_pareto_fronts();
    assert_eq!(
        distances.get_backward_pareto_front(0).pairs(),
        &[ParetoPair::new(2, 1)]
    );
    assert_eq!(
        distances.get_backward_pareto_front(2).pairs(),
        &[ParetoPair::new(1, 1)]
    );
}

#[test]
fn bound_carries_over_to_the_recompute() {
    // Under bound 3 the goal is reachable only before the abstraction
    // stretches the path.
    let mut distances = Distances::new(graph_of(3, &[(0, 1, 1), (1, 2, 2)], 0, &[2]), 3);
    let prunable = distances.compute_distances();
    assert_eq!(prunable, vec![false, false, false]);

    // Merging 1 into the goal class is not f-preserving; the recompute
    // runs under the same bound.
    distances.apply_abstraction(&[vec![0], vec![1, 2]]);
    assert_eq!(distances.get_goal_distance(0), 1);

    // Sanity: a fresh bounded instance where nothing fits reports INF.
    let mut tight = Distances::new(graph_of(2, &[(0, 1, 9)], 0, &[1]), 3);
    let _ = tight.compute_distances();
    assert_eq!(tight.get_init_distance(1), INF);
}
