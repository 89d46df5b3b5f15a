//! Bounded, cancellable polling
//!
//! The chart library loads out of band, so binding is retried at a fixed
//! interval until it succeeds, the attempt budget runs out, or the owning
//! view unmounts and cancels the token.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

use super::error::{ChartError, ChartResult};

/// How often and how many times to retry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetryPolicy {
    pub interval_ms: u32,
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            max_attempts: 50,
        }
    }
}

/// Shared "still mounted" flag
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// What to do after an attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Done,
    RetryAfter(u32),
    GaveUp { attempts: u32 },
    Failed(ChartError),
}

/// Attempt counter for one polling run
#[derive(Debug)]
pub struct Retry {
    policy: RetryPolicy,
    attempts: u32,
    token: CancelToken,
}

impl Retry {
    pub fn new(policy: RetryPolicy, token: CancelToken) -> Self {
        Self {
            policy,
            attempts: 0,
            token,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Record the outcome of one attempt
    pub fn record(&mut self, outcome: ChartResult<()>) -> Step {
        self.attempts += 1;
        match outcome {
            Ok(()) => Step::Done,
            Err(e) if e.is_retryable() => {
                if self.attempts >= self.policy.max_attempts {
                    Step::GaveUp {
                        attempts: self.attempts,
                    }
                } else {
                    Step::RetryAfter(self.policy.interval_ms)
                }
            }
            Err(e) => Step::Failed(e),
        }
    }
}

/// Deferred execution, e.g. a browser timeout
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Final result of a polling run
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The attempt succeeded
    Ready { attempts: u32 },
    /// The token was cancelled before the next attempt
    Cancelled { attempts: u32 },
    /// A non-retryable error, or `ChartError::Unavailable` after giving up
    Failed(ChartError),
}

type Attempt = Box<dyn FnMut() -> ChartResult<()>>;
type Finish = Box<dyn FnOnce(PollOutcome)>;

/// Run `attempt` now and then every `interval_ms` until it settles
///
/// Every continuation checks the token first, so cancelling suppresses any
/// pending attempt. `finish` is called exactly once.
pub fn poll<A, F>(
    policy: RetryPolicy,
    token: CancelToken,
    scheduler: Rc<dyn Scheduler>,
    attempt: A,
    finish: F,
) where
    A: FnMut() -> ChartResult<()> + 'static,
    F: FnOnce(PollOutcome) + 'static,
{
    let run = PollRun {
        retry: Retry::new(policy, token),
        scheduler,
        attempt: Box::new(attempt),
        finish: Box::new(finish),
    };
    run.step();
}

struct PollRun {
    retry: Retry,
    scheduler: Rc<dyn Scheduler>,
    attempt: Attempt,
    finish: Finish,
}

impl PollRun {
    fn step(mut self) {
        if self.retry.is_cancelled() {
            tracing::debug!("Polling cancelled after {} attempts", self.retry.attempts());
            let attempts = self.retry.attempts();
            (self.finish)(PollOutcome::Cancelled { attempts });
            return;
        }

        let outcome = (self.attempt)();
        match self.retry.record(outcome) {
            Step::Done => {
                let attempts = self.retry.attempts();
                (self.finish)(PollOutcome::Ready { attempts });
            }
            Step::RetryAfter(delay) => {
                let scheduler = Rc::clone(&self.scheduler);
                scheduler.schedule(delay, Box::new(move || self.step()));
            }
            Step::GaveUp { attempts } => {
                tracing::warn!("Giving up on chart after {} attempts", attempts);
                (self.finish)(PollOutcome::Failed(ChartError::Unavailable { attempts }));
            }
            Step::Failed(e) => {
                tracing::warn!("Chart binding failed: {}", e);
                (self.finish)(PollOutcome::Failed(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::testing::ManualScheduler;
    use std::cell::RefCell;

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            interval_ms: 100,
            max_attempts,
        }
    }

    #[test]
    fn test_record_steps() {
        let mut retry = Retry::new(policy(2), CancelToken::new());
        assert_eq!(
            retry.record(Err(ChartError::LibraryUnavailable)),
            Step::RetryAfter(100)
        );
        assert_eq!(
            retry.record(Err(ChartError::LibraryUnavailable)),
            Step::GaveUp { attempts: 2 }
        );

        let mut retry = Retry::new(policy(5), CancelToken::new());
        assert_eq!(retry.record(Ok(())), Step::Done);

        let mut retry = Retry::new(policy(5), CancelToken::new());
        assert!(matches!(
            retry.record(Err(ChartError::InvalidSpec("x".into()))),
            Step::Failed(_)
        ));
    }

    fn run_poll(
        max_attempts: u32,
        ready_on: u32,
        token: CancelToken,
        scheduler: &Rc<ManualScheduler>,
    ) -> Rc<RefCell<Option<PollOutcome>>> {
        let outcome = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&outcome);
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        poll(
            policy(max_attempts),
            token,
            scheduler.clone(),
            move || {
                counter.set(counter.get() + 1);
                if counter.get() >= ready_on {
                    Ok(())
                } else {
                    Err(ChartError::LibraryUnavailable)
                }
            },
            move |o| *sink.borrow_mut() = Some(o),
        );
        outcome
    }

    #[test]
    fn test_poll_succeeds_after_retries() {
        let scheduler = Rc::new(ManualScheduler::default());
        let outcome = run_poll(10, 3, CancelToken::new(), &scheduler);

        assert!(outcome.borrow().is_none());
        assert_eq!(scheduler.run_all(), 2);
        assert_eq!(*outcome.borrow(), Some(PollOutcome::Ready { attempts: 3 }));
        assert_eq!(scheduler.delays(), vec![100, 100]);
    }

    #[test]
    fn test_poll_gives_up() {
        let scheduler = Rc::new(ManualScheduler::default());
        let outcome = run_poll(4, u32::MAX, CancelToken::new(), &scheduler);
        scheduler.run_all();
        assert_eq!(
            *outcome.borrow(),
            Some(PollOutcome::Failed(ChartError::Unavailable { attempts: 4 }))
        );
    }

    #[test]
    fn test_poll_cancelled_between_attempts() {
        let scheduler = Rc::new(ManualScheduler::default());
        let token = CancelToken::new();
        let outcome = run_poll(10, u32::MAX, token.clone(), &scheduler);

        scheduler.run_next();
        token.cancel();
        scheduler.run_all();

        assert_eq!(*outcome.borrow(), Some(PollOutcome::Cancelled { attempts: 2 }));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_ready_immediately_schedules_nothing() {
        let scheduler = Rc::new(ManualScheduler::default());
        let outcome = run_poll(10, 1, CancelToken::new(), &scheduler);
        assert_eq!(*outcome.borrow(), Some(PollOutcome::Ready { attempts: 1 }));
        assert_eq!(scheduler.pending(), 0);
    }
}
