//! Timer host-service contracts.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`TimerService`].
pub type TimerFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Host service for scheduling a single delayed wake-up.
///
/// The shell uses this for its one bounded timeout (the dev-tools session
/// indicator); there is no cancellation — callers discard stale wake-ups by
/// matching session ids instead.
pub trait TimerService {
    /// Resolves after roughly `delay_ms` milliseconds.
    fn sleep_ms(&self, delay_ms: u32) -> TimerFuture<'_>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Timer that resolves immediately, for stubbed hosts and deterministic tests.
pub struct ImmediateTimerService;

impl TimerService for ImmediateTimerService {
    fn sleep_ms(&self, _delay_ms: u32) -> TimerFuture<'_> {
        Box::pin(async {})
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn immediate_timer_resolves_without_waiting() {
        let timer = ImmediateTimerService;
        let timer_obj: &dyn TimerService = &timer;
        block_on(timer_obj.sleep_ms(5_000));
    }
}
