use std::cmp::Ordering;

use super::{exhausted, SearchEmitter, Tracker};
use crate::domain::error::Result;
use crate::domain::{SearchOutcome, SearchStepKind};

const LINE_START: usize = 0;
const LINE_RANGE: usize = 2;
const LINE_MIDPOINT: usize = 3;
const LINE_FOUND: usize = 5;
const LINE_DISCARD_LEFT: usize = 7;
const LINE_DISCARD_RIGHT: usize = 9;
const LINE_NOT_FOUND: usize = 12;

/// Binary search over sorted `values`.
///
/// Internally `hi` is exclusive; logs show the inclusive range `[lo, hi - 1]`,
/// so an emptied range reads `[lo, lo - 1]` exactly like the listing's
/// `left > right` exit.
pub(crate) fn run(
    values: &[i64],
    target: i64,
    emitter: &mut SearchEmitter<'_>,
) -> Result<SearchOutcome> {
    let mut tracker = Tracker::new(emitter);
    tracker.note(
        SearchStepKind::Start,
        format!("Starting Binary Search for target {target}."),
        LINE_START,
    )?;

    let (mut lo, mut hi) = (0usize, values.len());
    while lo < hi {
        tracker.note(
            SearchStepKind::Range,
            format!("Current search range: [{lo}, {}].", hi - 1),
            LINE_RANGE,
        )?;

        let mid = lo + (hi - 1 - lo) / 2;
        let value = values[mid];
        tracker.probe(
            mid,
            SearchStepKind::Midpoint,
            format!("Middle index: {mid}. Comparing {value} with {target}."),
            LINE_MIDPOINT,
        )?;

        match value.cmp(&target) {
            Ordering::Equal => return tracker.found(mid, target, LINE_FOUND),
            Ordering::Less => {
                lo = mid + 1;
                tracker.probe(
                    mid,
                    SearchStepKind::DiscardLeft,
                    format!(
                        "{value} < {target}. Discarding left half. New range: [{lo}, {}].",
                        hi - 1
                    ),
                    LINE_DISCARD_LEFT,
                )?;
            }
            Ordering::Greater => {
                hi = mid;
                tracker.probe(
                    mid,
                    SearchStepKind::DiscardRight,
                    format!(
                        "{value} > {target}. Discarding right half. New range: [{lo}, {}].",
                        inclusive_end(hi)
                    ),
                    LINE_DISCARD_RIGHT,
                )?;
            }
        }
    }

    tracker.not_found(exhausted(target), LINE_NOT_FOUND)
}

/// `hi - 1` as a signed value, so an empty range at 0 prints `-1`.
fn inclusive_end(hi: usize) -> i64 {
    i64::try_from(hi).unwrap_or(i64::MAX) - 1
}

#[cfg(test)]
mod tests {
    use super::super::testing::{collect, REFERENCE};
    use super::*;

    fn midpoints(steps: &[crate::domain::SearchStep]) -> Vec<usize> {
        steps
            .iter()
            .filter(|s| s.kind == SearchStepKind::Midpoint)
            .filter_map(|s| s.probe)
            .collect()
    }

    #[test]
    fn narrows_to_the_target() {
        let (outcome, steps) = collect(|e| run(&REFERENCE, 23, e));
        assert_eq!(outcome, SearchOutcome::Found(4));
        assert_eq!(midpoints(&steps), vec![3, 5, 4]);

        let discards: Vec<_> = steps
            .iter()
            .filter(|s| matches!(s.kind, SearchStepKind::DiscardLeft | SearchStepKind::DiscardRight))
            .map(|s| s.log.as_str())
            .collect();
        assert_eq!(
            discards,
            vec![
                "12 < 23. Discarding left half. New range: [4, 7].",
                "27 > 23. Discarding right half. New range: [4, 4].",
            ]
        );
        assert_eq!(steps.last().unwrap().visited, vec![3, 5, 4]);
    }

    #[test]
    fn absent_target_ends_with_crossed_bounds() {
        let (outcome, steps) = collect(|e| run(&REFERENCE, 6, e));
        assert_eq!(outcome.to_signed(), -1);
        assert_eq!(midpoints(&steps), vec![3, 1, 2]);

        let last_discard = steps
            .iter()
            .rev()
            .find(|s| s.kind == SearchStepKind::DiscardRight)
            .unwrap();
        assert_eq!(last_discard.log, "8 > 6. Discarding right half. New range: [2, 1].");
        assert_eq!(steps.last().unwrap().kind, SearchStepKind::NotFound);
    }

    #[test]
    fn target_below_everything_prints_negative_bound() {
        let (_, steps) = collect(|e| run(&[5], 1, e));
        let discard = steps
            .iter()
            .find(|s| s.kind == SearchStepKind::DiscardRight)
            .unwrap();
        assert_eq!(discard.log, "5 > 1. Discarding right half. New range: [0, -1].");
    }

    #[test]
    fn first_range_spans_the_whole_input() {
        let (_, steps) = collect(|e| run(&REFERENCE, 39, e));
        let first_range = steps.iter().find(|s| s.kind == SearchStepKind::Range).unwrap();
        assert_eq!(first_range.log, "Current search range: [0, 7].");
    }
}
