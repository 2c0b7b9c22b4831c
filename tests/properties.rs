//! Property tests for the step-emitting runners.

use algoscope::algorithms::{Runner, SearchAlgorithm, SortAlgorithm};
use algoscope::domain::{SearchOutcome, SearchStep, SearchStepKind, SortStep, SortStepKind};
use proptest::prelude::*;

fn run_sort(algorithm: SortAlgorithm, values: &[i64]) -> (Vec<i64>, Vec<SortStep>) {
    let mut steps = Vec::new();
    let mut sink = |step: SortStep| steps.push(step);
    let outcome = Runner::immediate().sort(algorithm, values, &mut sink).unwrap();
    (outcome.values, steps)
}

fn run_search(
    algorithm: SearchAlgorithm,
    values: &[i64],
    target: i64,
) -> (SearchOutcome, Vec<SearchStep>) {
    let mut steps = Vec::new();
    let mut sink = |step: SearchStep| steps.push(step);
    let outcome = Runner::immediate()
        .search(algorithm, values, target, &mut sink)
        .unwrap();
    (outcome, steps)
}

/// Distinct ascending values with one of their indices.
fn sorted_with_index() -> impl Strategy<Value = (Vec<i64>, usize)> {
    prop::collection::btree_set(-99i64..=99, 1..=15).prop_flat_map(|set| {
        let values: Vec<i64> = set.into_iter().collect();
        let len = values.len();
        (Just(values), 0..len)
    })
}

proptest! {
    #[test]
    fn sorts_return_an_ordered_permutation(
        values in prop::collection::vec(-50i64..=50, 0..=15),
    ) {
        let mut expected = values.clone();
        expected.sort_unstable();

        for algorithm in SortAlgorithm::ALL {
            let (sorted, steps) = run_sort(algorithm, &values);
            prop_assert_eq!(&sorted, &expected, "{}", algorithm);

            let last = steps.last().unwrap();
            prop_assert_eq!(last.kind, SortStepKind::Sorted);
            prop_assert_eq!(&last.values, &expected);
        }
    }

    #[test]
    fn every_search_finds_a_present_target((values, index) in sorted_with_index()) {
        let target = values[index];
        for algorithm in SearchAlgorithm::ALL {
            let (outcome, steps) = run_search(algorithm, &values, target);
            prop_assert_eq!(outcome, SearchOutcome::Found(index), "{}", algorithm);
            prop_assert!(steps.last().unwrap().found);
        }
    }

    #[test]
    fn linear_search_accepts_unsorted_input(
        values in prop::collection::vec(0i64..=20, 1..=15),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = values[pick.index(values.len())];
        let first = values.iter().position(|&v| v == target).unwrap();

        let (outcome, steps) = run_search(SearchAlgorithm::Linear, &values, target);
        prop_assert_eq!(outcome, SearchOutcome::Found(first));
        let visited: Vec<usize> = (0..=first).collect();
        prop_assert_eq!(&steps.last().unwrap().visited, &visited);
    }

    #[test]
    fn absent_targets_end_in_a_single_not_found_step(
        set in prop::collection::btree_set(0i64..=40, 0..=15),
    ) {
        let values: Vec<i64> = set.into_iter().map(|v| v * 2).collect();
        for target in [-1, 41, 81] {
            for algorithm in SearchAlgorithm::ALL {
                let (outcome, steps) = run_search(algorithm, &values, target);
                prop_assert_eq!(outcome, SearchOutcome::NotFound, "{}", algorithm);

                let terminal: Vec<_> = steps.iter().filter(|s| s.kind.is_terminal()).collect();
                prop_assert_eq!(terminal.len(), 1);
                prop_assert_eq!(terminal[0].kind, SearchStepKind::NotFound);
                prop_assert!(!terminal[0].found);
            }
        }
    }

    #[test]
    fn bubble_sort_on_sorted_input_compares_without_swapping(
        mut values in prop::collection::vec(-50i64..=50, 0..=15),
    ) {
        values.sort_unstable();
        let n = values.len();

        let (_, steps) = run_sort(SortAlgorithm::Bubble, &values);
        let compares = steps.iter().filter(|s| s.kind == SortStepKind::Compare).count();
        let swaps = steps.iter().filter(|s| s.kind == SortStepKind::Swapped).count();
        prop_assert_eq!(compares, n * n.saturating_sub(1) / 2);
        prop_assert_eq!(swaps, 0);
    }

    #[test]
    fn steps_point_inside_their_listing(
        values in prop::collection::vec(-50i64..=50, 0..=12),
        target in -50i64..=50,
    ) {
        for algorithm in SortAlgorithm::ALL {
            let listing = algorithm.listing();
            let (_, steps) = run_sort(algorithm, &values);
            for step in &steps {
                prop_assert!(
                    step.line.map_or(true, |line| line < listing.len()),
                    "{} {:?} points at line {:?}", algorithm, step.kind, step.line
                );
            }
        }

        let mut sorted = values.clone();
        sorted.sort_unstable();
        for algorithm in SearchAlgorithm::ALL {
            let listing = algorithm.listing();
            let (_, steps) = run_search(algorithm, &sorted, target);
            for step in &steps {
                prop_assert!(
                    step.line.map_or(true, |line| line < listing.len()),
                    "{} {:?} points at line {:?}", algorithm, step.kind, step.line
                );
            }
        }
    }
}
