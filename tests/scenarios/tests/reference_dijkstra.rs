//! Cross-checks the engine's min costs against an independent scalar
//! Dijkstra on a family of small graphs, both directions.

use cairn_distances::Distances;
use cairn_front::INF;
use scenario_tests::{graph_of, reference_dijkstra, reversed};

struct Scenario {
    name: &'static str,
    num_states: usize,
    edges: &'static [(usize, usize, i32)],
    init_state: usize,
    goals: &'static [usize],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "chain",
        num_states: 4,
        edges: &[(0, 1, 2), (1, 2, 3), (2, 3, 1)],
        init_state: 0,
        goals: &[3],
    },
    Scenario {
        name: "diamond with shortcut",
        num_states: 4,
        edges: &[(0, 1, 1), (0, 2, 4), (1, 3, 4), (2, 3, 1), (0, 3, 9)],
        init_state: 0,
        goals: &[3],
    },
    Scenario {
        name: "unreachable island",
        num_states: 5,
        edges: &[(0, 1, 1), (1, 2, 1), (3, 4, 1)],
        init_state: 0,
        goals: &[2],
    },
    Scenario {
        name: "zero cost cycle",
        num_states: 4,
        edges: &[(0, 1, 0), (1, 0, 0), (1, 2, 5), (2, 3, 0)],
        init_state: 0,
        goals: &[3],
    },
    Scenario {
        name: "multiple goals",
        num_states: 5,
        edges: &[(0, 1, 2), (0, 2, 6), (1, 3, 2), (2, 4, 1)],
        init_state: 0,
        goals: &[3, 4],
    },
];

#[test]
fn engine_matches_reference_in_both_directions() {
    for scenario in SCENARIOS {
        let graph = graph_of(
            scenario.num_states,
            scenario.edges,
            scenario.init_state,
            scenario.goals,
        );
        let mut distances = Distances::unbounded(graph);
        let _ = distances.compute_distances();

        let expected_g =
            reference_dijkstra(scenario.num_states, scenario.edges, &[scenario.init_state]);
        let expected_h = reference_dijkstra(
            scenario.num_states,
            &reversed(scenario.edges),
            scenario.goals,
        );
        for state in 0..scenario.num_states {
            assert_eq!(
                distances.get_init_distance(state),
                expected_g[state],
                "{}: forward cost of state {state}",
                scenario.name
            );
            assert_eq!(
                distances.get_goal_distance(state),
                expected_h[state],
                "{}: backward cost of state {state}",
                scenario.name
            );
        }
    }
}

#[test]
fn prunable_states_are_exactly_the_inf_ones() {
    for scenario in SCENARIOS {
        let graph = graph_of(
            scenario.num_states,
            scenario.edges,
            scenario.init_state,
            scenario.goals,
        );
        let mut distances = Distances::unbounded(graph);
        let prunable = distances.compute_distances();

        for (state, &flag) in prunable.iter().enumerate() {
            let expected = distances.get_init_distance(state) == INF
                || distances.get_goal_distance(state) == INF;
            assert_eq!(
                flag, expected,
                "{}: prunable flag of state {state}",
                scenario.name
            );
        }
    }
}
