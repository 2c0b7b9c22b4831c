//! End-to-end scenarios on the reference sequences.
//!
//! Each test drives the public API the way the CLI does: a runner with a
//! collecting sink, or the state machine through `handle_event` and `drive`.

use std::io::Write;

use algoscope::algorithms::{is_sorted, Runner, SearchAlgorithm, SleepPacer, SortAlgorithm};
use algoscope::app::{Page, RunStatus};
use algoscope::domain::{
    SearchOutcome, SearchStep, SearchStepKind, Sequence, SortStep, SortStepKind,
};
use algoscope::worker::{drive, RunWorker};
use algoscope::{handle_event, initialize, AlgoscopeError, Config, Event};

const SORT_SAMPLE: [i64; 7] = [5, 3, 8, 4, 1, 2, 7];
const SEARCH_SAMPLE: [i64; 8] = [2, 5, 8, 12, 23, 27, 31, 39];

fn sort_steps(algorithm: SortAlgorithm, values: &[i64]) -> (Vec<i64>, Vec<SortStep>) {
    let mut steps = Vec::new();
    let mut sink = |step: SortStep| steps.push(step);
    let outcome = Runner::immediate().sort(algorithm, values, &mut sink).unwrap();
    (outcome.values, steps)
}

fn search_steps(
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

#[test]
fn every_sort_orders_the_sample() {
    for algorithm in SortAlgorithm::ALL {
        let (values, steps) = sort_steps(algorithm, &SORT_SAMPLE);
        assert_eq!(values, vec![1, 2, 3, 4, 5, 7, 8], "{algorithm}");

        let last = steps.last().unwrap();
        assert_eq!(last.kind, SortStepKind::Sorted);
        assert_eq!(last.log, "Array is sorted!");
        assert_eq!(steps.iter().filter(|s| s.kind.is_terminal()).count(), 1);
    }
}

#[test]
fn bubble_sort_narrates_the_first_comparison() {
    let (_, steps) = sort_steps(SortAlgorithm::Bubble, &SORT_SAMPLE);
    assert_eq!(steps[0].log, "Starting pass 1");
    assert_eq!(steps[1].log, "Comparing 5 and 3...");
    assert_eq!((steps[1].primary, steps[1].secondary), (Some(0), Some(1)));
    assert!(steps
        .iter()
        .any(|s| s.log == "Swap complete. Array: [3, 5, 8, 4, 1, 2, 7]"));
}

#[test]
fn linear_search_finds_23_at_index_4() {
    let (outcome, steps) = search_steps(SearchAlgorithm::Linear, &SEARCH_SAMPLE, 23);
    assert_eq!(outcome, SearchOutcome::Found(4));
    assert_eq!(outcome.to_signed(), 4);

    let last = steps.last().unwrap();
    assert!(last.found);
    assert_eq!(last.log, "Target 23 found at index 4!");
    assert_eq!(last.visited, vec![0, 1, 2, 3, 4]);
}

#[test]
fn binary_search_finds_23_through_three_midpoints() {
    let (outcome, steps) = search_steps(SearchAlgorithm::Binary, &SEARCH_SAMPLE, 23);
    assert_eq!(outcome, SearchOutcome::Found(4));

    let midpoints: Vec<usize> = steps
        .iter()
        .filter(|s| s.kind == SearchStepKind::Midpoint)
        .filter_map(|s| s.probe)
        .collect();
    assert_eq!(midpoints, vec![3, 5, 4]);
    assert!(steps.iter().any(|s| s.kind == SearchStepKind::DiscardLeft));
    assert!(steps.iter().any(|s| s.kind == SearchStepKind::DiscardRight));
}

#[test]
fn binary_search_for_6_crosses_its_bounds() {
    let (outcome, steps) = search_steps(SearchAlgorithm::Binary, &SEARCH_SAMPLE, 6);
    assert_eq!(outcome, SearchOutcome::NotFound);
    assert_eq!(outcome.to_signed(), -1);

    let terminal: Vec<_> = steps.iter().filter(|s| s.kind.is_terminal()).collect();
    assert_eq!(terminal.len(), 1);
    assert_eq!(terminal[0].kind, SearchStepKind::NotFound);
    assert_eq!(terminal[0].log, "Target 6 not found in the array.");
}

#[test]
fn jump_search_finds_31_at_index_6() {
    let (outcome, steps) = search_steps(SearchAlgorithm::Jump, &SEARCH_SAMPLE, 31);
    assert_eq!(outcome, SearchOutcome::Found(6));
    assert_eq!(steps.last().unwrap().log, "Target 31 found at index 6!");
}

#[test]
fn pacing_does_not_change_the_step_stream() {
    let paced = Runner::new(SleepPacer::from_millis(1));

    for algorithm in SortAlgorithm::ALL {
        let (_, immediate) = sort_steps(algorithm, &SORT_SAMPLE);
        let mut steps = Vec::new();
        let mut sink = |step: SortStep| steps.push(step);
        paced.sort(algorithm, &SORT_SAMPLE, &mut sink).unwrap();
        assert_eq!(steps, immediate, "{algorithm}");
    }

    for algorithm in SearchAlgorithm::ALL {
        let (_, immediate) = search_steps(algorithm, &SEARCH_SAMPLE, 27);
        let mut steps = Vec::new();
        let mut sink = |step: SearchStep| steps.push(step);
        paced.search(algorithm, &SEARCH_SAMPLE, 27, &mut sink).unwrap();
        assert_eq!(steps, immediate, "{algorithm}");
    }
}

#[test]
fn sortedness_predicate() {
    assert!(is_sorted(&[1, 1, 2, 3]));
    assert!(!is_sorted(&[3, 1, 2]));
    assert!(is_sorted(&[]));
}

#[test]
fn binary_and_jump_refuse_unsorted_input() {
    for algorithm in [SearchAlgorithm::Binary, SearchAlgorithm::Jump] {
        let mut steps = Vec::new();
        let mut sink = |step: SearchStep| steps.push(step);
        let err = Runner::immediate()
            .search(algorithm, &[3, 1, 2], 1, &mut sink)
            .unwrap_err();
        assert!(matches!(err, AlgoscopeError::Unsorted { index: 0 }));
        assert!(steps.is_empty());
    }
}

#[test]
fn search_page_sorts_before_a_binary_search() {
    let mut state = initialize(&Config {
        seed: Some(5),
        ..Default::default()
    });
    let worker = RunWorker::immediate();

    handle_event(&mut state, &Event::ShowSearching).unwrap();
    handle_event(
        &mut state,
        &Event::LoadValues(Sequence::parse("39 2 27 8", 15).unwrap()),
    )
    .unwrap();
    handle_event(&mut state, &Event::SelectSearch(SearchAlgorithm::Binary)).unwrap();
    handle_event(&mut state, &Event::SetTarget(27)).unwrap();
    assert!(state.search.needs_sorting);

    let (_, actions) = handle_event(&mut state, &Event::Run).unwrap();
    assert!(actions.is_empty());
    assert_eq!(state.search.values, vec![2, 8, 27, 39]);

    let (_, actions) = handle_event(&mut state, &Event::Run).unwrap();
    drive(&mut state, actions, &worker, &mut |_| {}).unwrap();

    assert_eq!(state.page, Page::Searching);
    assert_eq!(state.status, RunStatus::Completed);
    assert_eq!(state.search.found, Some(2));
    assert_eq!(
        state.search.log.last().map(String::as_str),
        Some("Search complete: Target 27 found at final index 2.")
    );
}

#[test]
fn max_steps_cancels_through_the_worker_token() {
    let mut state = initialize(&Config {
        seed: Some(5),
        ..Default::default()
    });
    let worker = RunWorker::immediate();
    let token = worker.cancel_token();

    let (_, actions) = handle_event(&mut state, &Event::Run).unwrap();
    drive(&mut state, actions, &worker, &mut |state| {
        if state.steps_applied >= 4 {
            token.cancel();
        }
    })
    .unwrap();

    assert_eq!(state.status, RunStatus::Cancelled);
    assert_eq!(state.steps_applied, 4);
    assert_eq!(
        state.sort.log.last().map(String::as_str),
        Some("Run cancelled after 4 steps.")
    );
}

#[test]
fn config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sort_delay_ms = 0").unwrap();
    writeln!(file, "search_max_len = 6").unwrap();
    writeln!(file, "bubble_early_exit = true").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.sort_delay_ms, 0);
    assert_eq!(config.search_max_len, 6);
    assert!(config.bubble_early_exit);
    assert_eq!(config.sort_max_len, 15);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, AlgoscopeError::Io(_)));
}

#[test]
fn strict_parse_rejects_garbage_and_overflowing_input() {
    assert!(matches!(
        Sequence::parse("1, two, 3", 15),
        Err(AlgoscopeError::InvalidInput(_))
    ));
    assert!(matches!(
        Sequence::parse("1 2 3 4", 3),
        Err(AlgoscopeError::SequenceTooLong { len: 4, max: 3 })
    ));
}
