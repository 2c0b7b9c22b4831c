use super::{finish, snapshot, SortEmitter};
use crate::domain::error::Result;
use crate::domain::{join_values, SortOutcome, SortStepKind};

const LINE_KEY: usize = 1;
const LINE_SHIFT: usize = 4;
const LINE_PLACE: usize = 7;

/// Insertion sort. `moves` counts shifts.
pub(crate) fn run(mut a: Vec<i64>, emitter: &mut SortEmitter<'_>) -> Result<SortOutcome> {
    let n = a.len();
    let mut comparisons = 0;
    let mut moves = 0;

    for i in 1..n {
        let key = a[i];
        emitter.emit(snapshot(
            &a,
            Some(i),
            None,
            SortStepKind::Select,
            format!("Considering element {key} (at index {i}) for insertion."),
            Some(LINE_KEY),
        ))?;

        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if a[j - 1] <= key {
                break;
            }
            emitter.emit(snapshot(
                &a,
                Some(j - 1),
                Some(j),
                SortStepKind::Shift,
                format!(
                    "Value {} (at index {}) is greater than key {key}. Shifting right.",
                    a[j - 1],
                    j - 1
                ),
                Some(LINE_SHIFT),
            ))?;
            a[j] = a[j - 1];
            moves += 1;
            j -= 1;
        }
        a[j] = key;

        let (kind, log) = if j < i {
            (
                SortStepKind::Inserted,
                format!("Key {key} inserted at position {j}. Array: [{}]", join_values(&a)),
            )
        } else {
            (
                SortStepKind::NoShift,
                format!(
                    "No elements shifted. {key} remains at index {i}. Array: [{}]",
                    join_values(&a)
                ),
            )
        };
        emitter.emit(snapshot(&a, Some(j), None, kind, log, Some(LINE_PLACE)))?;
    }

    finish(a, comparisons, moves, emitter)
}

#[cfg(test)]
mod tests {
    use super::super::testing::collect;
    use super::*;

    #[test]
    fn shifts_larger_elements_and_places_the_key() {
        let (outcome, steps) = collect(|e| run(vec![3, 1, 2], e));
        assert_eq!(outcome.values, vec![1, 2, 3]);
        assert_eq!(outcome.moves, 2);

        let logs: Vec<&str> = steps.iter().map(|s| s.log.as_str()).collect();
        assert_eq!(
            logs,
            vec![
                "Considering element 1 (at index 1) for insertion.",
                "Value 3 (at index 0) is greater than key 1. Shifting right.",
                "Key 1 inserted at position 0. Array: [1, 3, 2]",
                "Considering element 2 (at index 2) for insertion.",
                "Value 3 (at index 1) is greater than key 2. Shifting right.",
                "Key 2 inserted at position 1. Array: [1, 2, 3]",
                "Array is sorted!",
            ]
        );
    }

    #[test]
    fn no_shift_step_when_key_is_in_place() {
        let (outcome, steps) = collect(|e| run(vec![1, 2], e));
        assert_eq!(outcome.moves, 0);
        assert_eq!(steps[1].kind, SortStepKind::NoShift);
        assert_eq!(steps[1].log, "No elements shifted. 2 remains at index 1. Array: [1, 2]");
    }

    #[test]
    fn place_steps_carry_the_listing_line() {
        let (_, steps) = collect(|e| run(vec![4, 2, 9, 1], e));
        for step in steps.iter().filter(|s| {
            matches!(s.kind, SortStepKind::Inserted | SortStepKind::NoShift)
        }) {
            assert_eq!(step.line, Some(LINE_PLACE));
        }
    }
}
