use super::{exhausted, SearchEmitter, Tracker};
use crate::domain::error::Result;
use crate::domain::{SearchOutcome, SearchStepKind};

const LINE_START: usize = 0;
const LINE_CHECK: usize = 2;
const LINE_FOUND: usize = 3;
const LINE_NOT_FOUND: usize = 6;

pub(crate) fn run(
    values: &[i64],
    target: i64,
    emitter: &mut SearchEmitter<'_>,
) -> Result<SearchOutcome> {
    let mut tracker = Tracker::new(emitter);
    tracker.note(
        SearchStepKind::Start,
        format!("Starting Linear Search for target {target}."),
        LINE_START,
    )?;

    for (i, &value) in values.iter().enumerate() {
        tracker.probe(
            i,
            SearchStepKind::Check,
            format!("Checking index {i}: value is {value}."),
            LINE_CHECK,
        )?;
        if value == target {
            return tracker.found(i, target, LINE_FOUND);
        }
    }

    tracker.not_found(exhausted(target), LINE_NOT_FOUND)
}
