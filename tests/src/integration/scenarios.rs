//! # Reference Scenarios
//!
//! Fixed inputs with known orderings and failures, driven through the free
//! `sort` function and the service.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::NamedPairs;
    use composition_ordering::{
        order_indices, sort, CompositionOrderingApi, CompositionOrderingService,
        DependencyRelation, FnAnalyzer, OrderingError, SortError,
    };

    // =========================================================================
    // ORDERINGS
    // =========================================================================

    #[test]
    fn test_unrelated_units_keep_input_order() {
        let analyzer = NamedPairs::new(&[]);

        let ordered = sort(vec!["A", "B", "C"], &analyzer).unwrap();

        assert_eq!(ordered, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_single_constraint_moves_only_its_pair() {
        let analyzer = NamedPairs::new(&[("B", "A")]);

        let ordered = sort(vec!["A", "B", "C"], &analyzer).unwrap();

        assert_eq!(ordered, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_lowest_free_position_is_emitted_first() {
        let analyzer = NamedPairs::new(&[("C", "A"), ("D", "B")]);

        let ordered = sort(vec!["A", "B", "C", "D"], &analyzer).unwrap();

        assert_eq!(ordered, vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn test_transitive_constraint_through_unrelated_pair() {
        // A and C are never related directly; B links them
        let analyzer = NamedPairs::new(&[("C", "B"), ("B", "A")]);

        let ordered = sort(vec!["A", "B", "C"], &analyzer).unwrap();

        assert_eq!(ordered, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_equivalent_pairs_fall_back_to_input_order() {
        let analyzer = FnAnalyzer::new(|a: &&str, b: &&str| {
            Ok::<_, String>(match (*a, *b) {
                ("A", "B") | ("B", "A") => DependencyRelation::Equivalent,
                ("C", "A") => DependencyRelation::MustPrecede,
                ("A", "C") => DependencyRelation::MustFollow,
                _ => DependencyRelation::Unrelated,
            })
        });

        let ordered = sort(vec!["B", "A", "C"], &analyzer).unwrap();

        assert_eq!(ordered, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_duplicates_are_independent_units() {
        let analyzer = NamedPairs::new(&[("B", "A")]);

        let positions = order_indices(&["A", "B", "C", "B"], &analyzer).unwrap();

        // Both copies of B precede A
        assert_eq!(positions, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_empty_input_never_queries() {
        let analyzer = NamedPairs::new(&[("A", "B")]);

        let ordered = sort(Vec::<&'static str>::new(), &analyzer).unwrap();

        assert!(ordered.is_empty());
        assert_eq!(analyzer.calls(), 0);
    }

    #[test]
    fn test_queries_are_bounded_by_pairs() {
        let analyzer = NamedPairs::new(&[("D", "A")]);

        sort(vec!["A", "B", "C", "D"], &analyzer).unwrap();

        // 6 unordered pairs plus one confirmation for the constrained pair
        assert_eq!(analyzer.calls(), 7);
    }

    // =========================================================================
    // FAILURES
    // =========================================================================

    #[test]
    fn test_contradiction_is_a_two_cycle() {
        let analyzer = NamedPairs::new(&[("A", "B"), ("B", "A")]);

        let err = sort(vec!["A", "B"], &analyzer).unwrap_err();

        let cycle = err.cycle().expect("cycle expected");
        assert_eq!(cycle.units(), &["A", "B"]);
        assert_eq!(err.to_string(), "Dependency cycle detected: A → B → A");
    }

    #[test]
    fn test_shortest_cycle_is_reported() {
        // A → B → C → D → A with a chord C → A
        let analyzer =
            NamedPairs::new(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("C", "A")]);

        let err = sort(vec!["A", "B", "C", "D"], &analyzer).unwrap_err();

        assert_eq!(err.to_string(), "Dependency cycle detected: A → B → C → A");
    }

    #[test]
    fn test_cycle_excludes_orderable_units() {
        let analyzer = NamedPairs::new(&[("X", "Y"), ("B", "C"), ("C", "B")]);

        let err = sort(vec!["X", "B", "Y", "C"], &analyzer).unwrap_err();

        let cycle = err.cycle().expect("cycle expected");
        assert_eq!(cycle.units(), &["B", "C"]);
        assert_eq!(cycle.positions(), &[1, 3]);
    }

    #[test]
    fn test_analyzer_fault_aborts_unchanged() {
        let analyzer = FnAnalyzer::new(|a: &&str, b: &&str| {
            if *a == "Broken" || *b == "Broken" {
                Err(format!("no metadata for {}", if *a == "Broken" { a } else { b }))
            } else {
                Ok(DependencyRelation::Unrelated)
            }
        });

        let err = sort(vec!["A", "Broken", "C"], &analyzer).unwrap_err();

        match err {
            SortError::AnalyzerFault(message) => assert_eq!(message, "no metadata for Broken"),
            other => panic!("expected analyzer fault, got {other:?}"),
        }
    }

    #[test]
    fn test_service_renders_cycle_for_consumers() {
        let service = CompositionOrderingService::new();
        let analyzer = NamedPairs::new(&[("A", "B"), ("B", "A")]);

        let err = service.order(vec!["A", "B"], &analyzer).unwrap_err();

        match err {
            OrderingError::CycleDetected { cycle, positions } => {
                assert_eq!(cycle, "A → B → A");
                assert_eq!(positions, vec![0, 1]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }
}
