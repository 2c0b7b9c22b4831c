//! The step-sink capability.
//!
//! A runner hands every step to a sink synchronously and keeps going. Sinks
//! have no return value and cannot fail; turning steps into display state is
//! the caller's business. Any `FnMut(S)` closure is a sink, which is how the
//! application layer, the CLI, and the tests all consume runs.

/// Receives step events from a runner.
///
/// # Example
///
/// ```
/// use algoscope::algorithms::{Runner, SortAlgorithm};
/// use algoscope::domain::SortStep;
///
/// let mut log = Vec::new();
/// let mut sink = |step: SortStep| log.push(step.log);
/// let outcome = Runner::immediate()
///     .sort(SortAlgorithm::Insertion, &[3, 1, 2], &mut sink)
///     .unwrap();
///
/// assert_eq!(outcome.values, vec![1, 2, 3]);
/// assert_eq!(log.last().map(String::as_str), Some("Array is sorted!"));
/// ```
pub trait StepSink<S> {
    /// Accepts one step.
    fn accept(&mut self, step: S);
}

impl<S, F> StepSink<S> for F
where
    F: FnMut(S),
{
    fn accept(&mut self, step: S) {
        self(step);
    }
}
