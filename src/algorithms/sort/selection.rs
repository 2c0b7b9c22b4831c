use super::{finish, snapshot, SortEmitter};
use crate::domain::error::Result;
use crate::domain::{join_values, SortOutcome, SortStepKind};

const LINE_ASSUME: usize = 1;
const LINE_CONDITION: usize = 3;
const LINE_NEW_MIN: usize = 4;
const LINE_SWAP_CHECK: usize = 7;
const LINE_SWAP: usize = 8;

/// Selection sort. Swaps only when the minimum is not already in place.
pub(crate) fn run(mut a: Vec<i64>, emitter: &mut SortEmitter<'_>) -> Result<SortOutcome> {
    let n = a.len();
    let mut comparisons = 0;
    let mut moves = 0;

    for i in 0..n {
        let mut min = i;
        emitter.emit(snapshot(
            &a,
            Some(min),
            None,
            SortStepKind::PassStart,
            format!(
                "Starting selection for current pass. Assuming {} (at index {i}) is minimum.",
                a[i]
            ),
            Some(LINE_ASSUME),
        ))?;

        for j in i + 1..n {
            emitter.emit(snapshot(
                &a,
                Some(min),
                Some(j),
                SortStepKind::Compare,
                format!(
                    "Comparing {} (at index {j}) with current minimum {} (at index {min}).",
                    a[j], a[min]
                ),
                Some(LINE_CONDITION),
            ))?;
            comparisons += 1;

            if a[j] < a[min] {
                min = j;
                emitter.emit(snapshot(
                    &a,
                    Some(min),
                    None,
                    SortStepKind::NewMinimum,
                    format!("New minimum found: {} at index {min}.", a[min]),
                    Some(LINE_NEW_MIN),
                ))?;
            } else {
                emitter.emit(snapshot(
                    &a,
                    Some(min),
                    Some(j),
                    SortStepKind::Retain,
                    format!("Current minimum {} is smaller or equal.", a[min]),
                    Some(LINE_CONDITION),
                ))?;
            }
        }

        if min != i {
            emitter.emit(snapshot(
                &a,
                Some(i),
                Some(min),
                SortStepKind::SwapDecision,
                format!("Minimum {} found. Swapping {} and {}.", a[min], a[i], a[min]),
                Some(LINE_SWAP),
            ))?;
            a.swap(i, min);
            moves += 1;
            emitter.emit(snapshot(
                &a,
                Some(i),
                Some(min),
                SortStepKind::Swapped,
                format!("Swap complete. Array: [{}]", join_values(&a)),
                Some(LINE_SWAP),
            ))?;
        } else {
            emitter.emit(snapshot(
                &a,
                Some(i),
                None,
                SortStepKind::NoSwap,
                format!("No swap needed for index {i} as {} was already the minimum.", a[i]),
                Some(LINE_SWAP_CHECK),
            ))?;
        }
    }

    finish(a, comparisons, moves, emitter)
}
