//! In-memory chart backend and scheduler
//!
//! Used by the test suites and usable by any host without a real plotting
//! library. Clones of a [`RecordingBackend`] share state, so a test can hold
//! one handle for assertions while a scope owns another.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use super::error::{ChartError, ChartResult};
use super::retry::Scheduler;
use super::scope::ChartBackend;
use super::spec::ChartSpec;

#[derive(Debug, Default)]
struct BackendState {
    available: bool,
    mounts: HashSet<String>,
    next_handle: u32,
    live: HashSet<u32>,
    created: usize,
    destroyed: usize,
    last_spec: Option<ChartSpec>,
}

/// Backend that records create/destroy calls
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    state: Rc<RefCell<BackendState>>,
}

impl RecordingBackend {
    /// Library loaded, with the given mount points present
    pub fn ready(mounts: &[&str]) -> Self {
        let backend = Self::default();
        {
            let mut state = backend.state.borrow_mut();
            state.available = true;
            state.mounts = mounts.iter().map(|m| m.to_string()).collect();
        }
        backend
    }

    /// Library not loaded yet, with the given mount points present
    pub fn loading(mounts: &[&str]) -> Self {
        let backend = Self::ready(mounts);
        backend.set_available(false);
        backend
    }

    pub fn set_available(&self, available: bool) {
        self.state.borrow_mut().available = available;
    }

    pub fn add_mount(&self, mount_id: &str) {
        self.state.borrow_mut().mounts.insert(mount_id.to_string());
    }

    pub fn created(&self) -> usize {
        self.state.borrow().created
    }

    pub fn destroyed(&self) -> usize {
        self.state.borrow().destroyed
    }

    /// Instances created and not yet destroyed
    pub fn live(&self) -> usize {
        self.state.borrow().live.len()
    }

    pub fn last_spec(&self) -> Option<ChartSpec> {
        self.state.borrow().last_spec.clone()
    }
}

impl ChartBackend for RecordingBackend {
    type Handle = u32;

    fn is_available(&self) -> bool {
        self.state.borrow().available
    }

    fn create(&mut self, mount_id: &str, spec: &ChartSpec) -> ChartResult<u32> {
        let mut state = self.state.borrow_mut();
        if !state.mounts.contains(mount_id) {
            return Err(ChartError::MountMissing(mount_id.to_string()));
        }
        let handle = state.next_handle;
        state.next_handle += 1;
        state.live.insert(handle);
        state.created += 1;
        state.last_spec = Some(spec.clone());
        Ok(handle)
    }

    fn destroy(&mut self, handle: u32) {
        let mut state = self.state.borrow_mut();
        if state.live.remove(&handle) {
            state.destroyed += 1;
        }
    }
}

type Task = Box<dyn FnOnce()>;

/// Scheduler that queues tasks until the test runs them
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<Task>>,
    delays: RefCell<Vec<u32>>,
}

impl ManualScheduler {
    /// Run the oldest queued task; returns whether one ran
    pub fn run_next(&self) -> bool {
        let task = self.queue.borrow_mut().pop_front();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run until the queue is empty; returns how many tasks ran
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Every delay requested so far
    pub fn delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.delays.borrow_mut().push(delay_ms);
        self.queue.borrow_mut().push_back(task);
    }
}
