use super::{finish, snapshot, SortEmitter};
use crate::domain::error::Result;
use crate::domain::{join_values, SortOutcome, SortStepKind};

const LINE_OUTER: usize = 0;
const LINE_INNER: usize = 1;
const LINE_CONDITION: usize = 2;
const LINE_SWAP: usize = 3;

/// Bubble sort over `n - 1` passes.
///
/// With `early_exit` the run stops after the first pass without a swap and
/// emits an `EarlyExit` step; otherwise every pass runs.
pub(crate) fn run(
    mut a: Vec<i64>,
    early_exit: bool,
    emitter: &mut SortEmitter<'_>,
) -> Result<SortOutcome> {
    let n = a.len();
    let mut comparisons = 0;
    let mut moves = 0;

    for i in 0..n.saturating_sub(1) {
        tracing::trace!(pass = i + 1, "bubble pass");
        emitter.emit(snapshot(
            &a,
            None,
            None,
            SortStepKind::PassStart,
            format!("Starting pass {}", i + 1),
            Some(LINE_OUTER),
        ))?;

        let mut swapped = false;
        for j in 0..n - i - 1 {
            emitter.emit(snapshot(
                &a,
                Some(j),
                Some(j + 1),
                SortStepKind::Compare,
                format!("Comparing {} and {}...", a[j], a[j + 1]),
                Some(LINE_INNER),
            ))?;
            comparisons += 1;

            if a[j] > a[j + 1] {
                emitter.emit(snapshot(
                    &a,
                    Some(j),
                    Some(j + 1),
                    SortStepKind::SwapDecision,
                    format!(
                        "Condition (a[{j}] > a[{}]) is TRUE. Swapping {} and {}.",
                        j + 1,
                        a[j],
                        a[j + 1]
                    ),
                    Some(LINE_CONDITION),
                ))?;
                a.swap(j, j + 1);
                moves += 1;
                swapped = true;
                emitter.emit(snapshot(
                    &a,
                    Some(j),
                    Some(j + 1),
                    SortStepKind::Swapped,
                    format!("Swap complete. Array: [{}]", join_values(&a)),
                    Some(LINE_SWAP),
                ))?;
            } else {
                emitter.emit(snapshot(
                    &a,
                    Some(j),
                    Some(j + 1),
                    SortStepKind::Retain,
                    format!("Condition (a[{j}] > a[{}]) is FALSE. Retaining order.", j + 1),
                    Some(LINE_CONDITION),
                ))?;
            }
        }

        if early_exit && !swapped {
            emitter.emit(snapshot(
                &a,
                None,
                None,
                SortStepKind::EarlyExit,
                format!("No swaps during pass {}. Stopping early.", i + 1),
                None,
            ))?;
            break;
        }
    }

    finish(a, comparisons, moves, emitter)
}
