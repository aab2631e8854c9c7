//! # Ordering Properties
//!
//! Property tests over random acyclic analyzers, plus cyclic variants built
//! by reversing one constraint.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::IndexEdges;
    use composition_ordering::algorithms::build_relation_graph;
    use composition_ordering::domain::invariants::{invariant_no_cycles, invariant_stability};
    use composition_ordering::{
        order_indices, sort, CompositionOrderingApi, CompositionOrderingService,
    };
    use proptest::prelude::*;

    /// Unit count plus constraints that all agree with one hidden ranking.
    fn acyclic_analyzer() -> impl Strategy<Value = (usize, IndexEdges)> {
        (1usize..10)
            .prop_flat_map(|n| {
                (
                    Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                    prop::collection::vec((0..n, 0..n), 0..20),
                )
            })
            .prop_map(|(rank, pairs)| {
                let mut edges = Vec::new();
                for (a, b) in pairs {
                    if a == b {
                        continue;
                    }
                    let edge = if rank[a] < rank[b] { (a, b) } else { (b, a) };
                    if !edges.contains(&edge) {
                        edges.push(edge);
                    }
                }
                (rank.len(), IndexEdges::new(edges))
            })
    }

    fn positions_of(order: &[usize]) -> Vec<usize> {
        let mut position = vec![0; order.len()];
        for (k, &unit) in order.iter().enumerate() {
            position[unit] = k;
        }
        position
    }

    proptest! {
        #[test]
        fn sort_returns_every_unit_once((n, analyzer) in acyclic_analyzer()) {
            let mut sorted = sort((0..n).collect::<Vec<_>>(), &analyzer).unwrap();

            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        }

        #[test]
        fn every_constraint_holds((n, analyzer) in acyclic_analyzer()) {
            let sorted = sort((0..n).collect::<Vec<_>>(), &analyzer).unwrap();
            let position = positions_of(&sorted);

            for &(before, after) in analyzer.edges() {
                prop_assert!(position[before] < position[after]);
            }
        }

        #[test]
        fn sorting_is_deterministic((n, analyzer) in acyclic_analyzer()) {
            let first = sort((0..n).collect::<Vec<_>>(), &analyzer).unwrap();
            let second = sort((0..n).collect::<Vec<_>>(), &analyzer).unwrap();

            prop_assert_eq!(first, second);
        }

        #[test]
        fn sorted_input_is_left_alone((n, analyzer) in acyclic_analyzer()) {
            let sorted = sort((0..n).collect::<Vec<_>>(), &analyzer).unwrap();
            let resorted = sort(sorted.clone(), &analyzer).unwrap();

            prop_assert_eq!(resorted, sorted);
        }

        #[test]
        fn inversions_are_forced_by_constraints((n, analyzer) in acyclic_analyzer()) {
            let units: Vec<usize> = (0..n).collect();
            let graph = build_relation_graph(&units, &analyzer).unwrap();
            let order = order_indices(&units, &analyzer).unwrap();

            prop_assert!(invariant_no_cycles(&graph));
            prop_assert!(invariant_stability(&order, &graph));
        }

        #[test]
        fn unconstrained_units_keep_their_order((n, analyzer) in acyclic_analyzer()) {
            let sorted = sort((0..n).collect::<Vec<_>>(), &analyzer).unwrap();
            let isolated: Vec<usize> = sorted
                .iter()
                .copied()
                .filter(|unit| {
                    analyzer
                        .edges()
                        .iter()
                        .all(|&(a, b)| a != *unit && b != *unit)
                })
                .collect();

            let mut expected = isolated.clone();
            expected.sort_unstable();
            prop_assert_eq!(isolated, expected);
        }

        #[test]
        fn service_agrees_with_free_function((n, analyzer) in acyclic_analyzer()) {
            let service = CompositionOrderingService::new();

            let from_service = service.order((0..n).collect::<Vec<_>>(), &analyzer).unwrap();
            let from_sort = sort((0..n).collect::<Vec<_>>(), &analyzer).unwrap();

            prop_assert_eq!(from_service, from_sort);
        }

        #[test]
        fn reversed_constraint_is_reported_as_two_cycle(
            (n, analyzer) in acyclic_analyzer(),
            pick in 0usize..20,
        ) {
            prop_assume!(!analyzer.edges().is_empty());
            let (a, b) = analyzer.edges()[pick % analyzer.edges().len()];
            let mut edges = analyzer.edges().to_vec();
            edges.push((b, a));
            let cyclic = IndexEdges::new(edges);

            let err = sort((0..n).collect::<Vec<_>>(), &cyclic).unwrap_err();

            let cycle = err.cycle().expect("cycle expected");
            prop_assert_eq!(cycle.len(), 2);
            prop_assert!(cycle.units().contains(&a));
            prop_assert!(cycle.units().contains(&b));
        }
    }
}
