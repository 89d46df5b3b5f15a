//! Chart lifecycle for a mounted view
//!
//! Ties a [`ChartScope`] to the polling primitive: every `update` cancels any
//! pending poll and starts a new one that rebinds the chart from scratch,
//! and `teardown` cancels polling and destroys the live chart.

use std::cell::RefCell;
use std::rc::Rc;

use super::retry::{poll, CancelToken, PollOutcome, RetryPolicy, Scheduler};
use super::scope::{ChartBackend, ChartScope};
use super::spec::ChartSpec;

type OutcomeHandler = Rc<dyn Fn(&PollOutcome)>;

/// Chart owned by one mounted view
pub struct ChartBinding<B>
where
    B: ChartBackend + 'static,
    B::Handle: 'static,
{
    scope: Rc<RefCell<ChartScope<B>>>,
    scheduler: Rc<dyn Scheduler>,
    policy: RetryPolicy,
    pending: Option<CancelToken>,
    on_outcome: Option<OutcomeHandler>,
}

impl<B> ChartBinding<B>
where
    B: ChartBackend + 'static,
    B::Handle: 'static,
{
    pub fn new(scope: ChartScope<B>, scheduler: Rc<dyn Scheduler>, policy: RetryPolicy) -> Self {
        Self {
            scope: Rc::new(RefCell::new(scope)),
            scheduler,
            policy,
            pending: None,
            on_outcome: None,
        }
    }

    /// Observe how each polling run settles
    pub fn on_outcome(mut self, handler: impl Fn(&PollOutcome) + 'static) -> Self {
        self.on_outcome = Some(Rc::new(handler));
        self
    }

    /// Draw `spec`, replacing whatever was drawn or pending before
    pub fn update(&mut self, spec: ChartSpec) {
        self.cancel_pending();

        let token = CancelToken::new();
        self.pending = Some(token.clone());

        let scope = Rc::clone(&self.scope);
        let handler = self.on_outcome.clone();
        poll(
            self.policy,
            token,
            Rc::clone(&self.scheduler),
            move || scope.borrow_mut().bind(&spec),
            move |outcome| {
                if let Some(handler) = handler {
                    handler(&outcome);
                }
            },
        );
    }

    /// Stop polling and destroy the live chart
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.scope.borrow_mut().release();
    }

    pub fn is_live(&self) -> bool {
        self.scope.borrow().is_live()
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl<B> Drop for ChartBinding<B>
where
    B: ChartBackend + 'static,
    B::Handle: 'static,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::error::ChartError;
    use crate::chart::presets::attendance_chart;
    use crate::chart::testing::{ManualScheduler, RecordingBackend};

    fn binding(
        backend: &RecordingBackend,
        scheduler: &Rc<ManualScheduler>,
    ) -> (ChartBinding<RecordingBackend>, Rc<RefCell<Vec<PollOutcome>>>) {
        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&outcomes);
        let binding = ChartBinding::new(
            ChartScope::new(backend.clone(), "attendance"),
            scheduler.clone(),
            RetryPolicy {
                interval_ms: 100,
                max_attempts: 5,
            },
        )
        .on_outcome(move |o| sink.borrow_mut().push(o.clone()));
        (binding, outcomes)
    }

    #[test]
    fn test_update_binds_immediately_when_ready() {
        let backend = RecordingBackend::ready(&["attendance"]);
        let scheduler = Rc::new(ManualScheduler::default());
        let (mut binding, outcomes) = binding(&backend, &scheduler);

        binding.update(attendance_chart(92.8, 75.0));
        assert!(binding.is_live());
        assert_eq!(*outcomes.borrow(), vec![PollOutcome::Ready { attempts: 1 }]);
    }

    #[test]
    fn test_waits_for_library() {
        let backend = RecordingBackend::loading(&["attendance"]);
        let scheduler = Rc::new(ManualScheduler::default());
        let (mut binding, _) = binding(&backend, &scheduler);

        binding.update(attendance_chart(92.8, 75.0));
        assert!(!binding.is_live());

        scheduler.run_next();
        backend.set_available(true);
        scheduler.run_next();
        assert!(binding.is_live());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_update_while_pending_cancels_old_poll() {
        let backend = RecordingBackend::loading(&["attendance"]);
        let scheduler = Rc::new(ManualScheduler::default());
        let (mut binding, outcomes) = binding(&backend, &scheduler);

        binding.update(attendance_chart(70.0, 75.0));
        binding.update(attendance_chart(80.0, 75.0));
        backend.set_available(true);
        scheduler.run_all();

        assert_eq!(backend.live(), 1);
        assert_eq!(backend.created(), 1);
        assert_eq!(backend.last_spec().unwrap().data.datasets[0].data[0], 80.0);
        assert!(outcomes
            .borrow()
            .contains(&PollOutcome::Cancelled { attempts: 1 }));
    }

    #[test]
    fn test_teardown_suppresses_pending_attempt() {
        let backend = RecordingBackend::loading(&["attendance"]);
        let scheduler = Rc::new(ManualScheduler::default());
        let (mut binding, outcomes) = binding(&backend, &scheduler);

        binding.update(attendance_chart(92.8, 75.0));
        binding.teardown();
        backend.set_available(true);
        scheduler.run_all();

        assert_eq!(backend.created(), 0);
        assert_eq!(
            *outcomes.borrow(),
            vec![PollOutcome::Cancelled { attempts: 1 }]
        );
    }

    #[test]
    fn test_gives_up_when_library_never_loads() {
        let backend = RecordingBackend::loading(&["attendance"]);
        let scheduler = Rc::new(ManualScheduler::default());
        let (mut binding, outcomes) = binding(&backend, &scheduler);

        binding.update(attendance_chart(92.8, 75.0));
        scheduler.run_all();

        assert_eq!(
            outcomes.borrow().last(),
            Some(&PollOutcome::Failed(ChartError::Unavailable { attempts: 5 }))
        );
    }

    #[test]
    fn test_waits_for_mount_point() {
        let backend = RecordingBackend::ready(&[]);
        let scheduler = Rc::new(ManualScheduler::default());
        let (mut binding, outcomes) = binding(&backend, &scheduler);

        binding.update(attendance_chart(92.8, 75.0));
        assert!(!binding.is_live());

        backend.add_mount("attendance");
        scheduler.run_all();

        assert!(binding.is_live());
        assert_eq!(backend.created(), 1);
        assert_eq!(*outcomes.borrow(), vec![PollOutcome::Ready { attempts: 2 }]);
    }

    #[test]
    fn test_gives_up_when_mount_never_appears() {
        let backend = RecordingBackend::ready(&[]);
        let scheduler = Rc::new(ManualScheduler::default());
        let (mut binding, outcomes) = binding(&backend, &scheduler);

        binding.update(attendance_chart(92.8, 75.0));
        assert_eq!(scheduler.run_all(), 4);

        assert!(!binding.is_live());
        assert_eq!(backend.created(), 0);
        assert_eq!(
            *outcomes.borrow(),
            vec![PollOutcome::Failed(ChartError::Unavailable { attempts: 5 })]
        );
    }

    #[test]
    fn test_drop_destroys_chart() {
        let backend = RecordingBackend::ready(&["attendance"]);
        let scheduler = Rc::new(ManualScheduler::default());
        {
            let (mut binding, _) = binding(&backend, &scheduler);
            binding.update(attendance_chart(92.8, 75.0));
        }
        assert_eq!(backend.live(), 0);
        assert_eq!(backend.destroyed(), 1);
    }
}
