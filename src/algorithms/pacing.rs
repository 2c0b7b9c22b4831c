//! Inter-step pacing and cooperative cancellation.
//!
//! Pacing is purely cosmetic: a runner produces the same steps whether it
//! sleeps between them or not. Tests use [`NoPacing`]; the terminal replay
//! uses [`SleepPacer`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Suspends the runner between steps.
pub trait Pacer {
    /// Called once after every non-terminal step.
    fn pause(&self);
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&self) {}
}

/// Sleeps the current thread for a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Pacer for SleepPacer {
    fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Shared flag checked by the runner before each step.
///
/// Clones share the same flag, so a token handed to a step sink can stop the
/// run that is feeding it.
///
/// # Example
///
/// ```
/// use algoscope::algorithms::{Runner, SortAlgorithm};
/// use algoscope::domain::SortStep;
/// use algoscope::AlgoscopeError;
///
/// let runner = Runner::immediate();
/// let token = runner.cancel_token();
/// let mut seen = 0;
/// let mut sink = |_step: SortStep| {
///     seen += 1;
///     if seen == 3 {
///         token.cancel();
///     }
/// };
///
/// let result = runner.sort(SortAlgorithm::Bubble, &[4, 3, 2, 1], &mut sink);
/// assert!(matches!(result, Err(AlgoscopeError::Cancelled)));
/// assert_eq!(seen, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Clears the flag so the token can guard another run.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
