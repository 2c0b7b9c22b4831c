use super::{exhausted, SearchEmitter, Tracker};
use crate::domain::error::Result;
use crate::domain::{SearchOutcome, SearchStepKind};

const LINE_BLOCK_SIZE: usize = 2;
const LINE_JUMP: usize = 4;
const LINE_BLOCK: usize = 8;
const LINE_CHECK: usize = 9;
const LINE_FOUND: usize = 10;
const LINE_NOT_FOUND: usize = 13;

/// Jump search over sorted `values` with block size `floor(sqrt(n))`.
pub(crate) fn run(
    values: &[i64],
    target: i64,
    emitter: &mut SearchEmitter<'_>,
) -> Result<SearchOutcome> {
    let mut tracker = Tracker::new(emitter);
    let n = values.len();
    if n == 0 {
        return tracker.not_found(
            format!("Array is empty. Target {target} not found."),
            LINE_NOT_FOUND,
        );
    }

    let step = block_size(n);
    tracker.note(
        SearchStepKind::Start,
        format!("Starting Jump Search for target {target}. Block size: {step}."),
        LINE_BLOCK_SIZE,
    )?;

    let (mut prev, mut curr) = (0usize, 0usize);
    while curr < n && values[curr] < target {
        tracker.probe(
            curr,
            SearchStepKind::Jump,
            format!("Jumping to index {curr}. Value is {}.", values[curr]),
            LINE_JUMP,
        )?;
        prev = curr;
        curr += step;
    }

    let upper = curr.min(n - 1);
    tracker.note(
        SearchStepKind::BlockFound,
        format!(
            "Found block where {target} might be. Linear searching from index {prev} to {upper}."
        ),
        LINE_BLOCK,
    )?;

    for i in prev..=upper {
        tracker.probe(
            i,
            SearchStepKind::Check,
            format!("Linearly checking index {i}: value is {}.", values[i]),
            LINE_CHECK,
        )?;
        if values[i] == target {
            return tracker.found(i, target, LINE_FOUND);
        }
    }

    tracker.not_found(exhausted(target), LINE_NOT_FOUND)
}

/// Integer square root, at least 1 for non-empty input.
fn block_size(n: usize) -> usize {
    let mut root = 1;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::super::testing::{collect, REFERENCE};
    use super::*;

    #[test]
    fn block_size_is_floor_sqrt() {
        assert_eq!(block_size(1), 1);
        assert_eq!(block_size(3), 1);
        assert_eq!(block_size(4), 2);
        assert_eq!(block_size(8), 2);
        assert_eq!(block_size(9), 3);
        assert_eq!(block_size(15), 3);
    }

    #[test]
    fn jumps_then_scans_the_block() {
        let (outcome, steps) = collect(|e| run(&REFERENCE, 31, e));
        assert_eq!(outcome, SearchOutcome::Found(6));

        let jumps: Vec<_> = steps
            .iter()
            .filter(|s| s.kind == SearchStepKind::Jump)
            .filter_map(|s| s.probe)
            .collect();
        assert_eq!(jumps, vec![0, 2, 4]);

        let block = steps
            .iter()
            .find(|s| s.kind == SearchStepKind::BlockFound)
            .unwrap();
        assert_eq!(
            block.log,
            "Found block where 31 might be. Linear searching from index 4 to 6."
        );

        // Index 4 was a jump landing; the scan revisits it without duplicating it.
        assert_eq!(steps.last().unwrap().visited, vec![0, 2, 4, 5, 6]);
    }

    #[test]
    fn target_past_the_end_scans_the_tail() {
        let (outcome, steps) = collect(|e| run(&REFERENCE, 40, e));
        assert_eq!(outcome, SearchOutcome::NotFound);
        let checks: Vec<_> = steps
            .iter()
            .filter(|s| s.kind == SearchStepKind::Check)
            .filter_map(|s| s.probe)
            .collect();
        assert_eq!(checks, vec![6, 7]);
        assert_eq!(steps.last().unwrap().log, "Target 40 not found in the array.");
    }

    #[test]
    fn empty_input_emits_a_single_step() {
        let (outcome, steps) = collect(|e| run(&[], 3, e));
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].log, "Array is empty. Target 3 not found.");
    }
}
