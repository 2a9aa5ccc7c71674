//! Cancellable deferred tasks.
//!
//! Publishing a recognition result waits [`PUBLISH_DELAY_MS`] per entry. Each
//! delay is its own timer, not a queue, so several may fire in any order when
//! calculate calls overlap. [`TaskScheduler`] keeps every pending task with
//! its timer handle so reset and unmount can drop them all at once; dropping a
//! `gloo_timers::callback::Timeout` clears the browser timer.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Delay between a response arriving and each of its entries being published.
pub const PUBLISH_DELAY_MS: u32 = 1_000;

/// Identifier of a task tracked by a [`TaskTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// Bookkeeping for outstanding handles of type `H`.
///
/// Ids are never reused within one table.
#[derive(Debug)]
pub struct TaskTable<H> {
    next_id: u64,
    tasks: BTreeMap<TaskId, H>,
}

impl<H> Default for TaskTable<H> {
    fn default() -> Self {
        Self { next_id: 0, tasks: BTreeMap::new() }
    }
}

impl<H> TaskTable<H> {
    /// Allocate an id without a handle yet.
    pub fn reserve(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Attach the handle for a reserved id.
    pub fn attach(&mut self, id: TaskId, handle: H) {
        self.tasks.insert(id, handle);
    }

    /// Reserve an id and attach `handle` to it.
    pub fn insert(&mut self, handle: H) -> TaskId {
        let id = self.reserve();
        self.attach(id, handle);
        id
    }

    /// Forget a finished task, returning its handle.
    pub fn complete(&mut self, id: TaskId) -> Option<H> {
        self.tasks.remove(&id)
    }

    /// Remove and return every outstanding handle, oldest first.
    pub fn drain(&mut self) -> Vec<H> {
        std::mem::take(&mut self.tasks).into_values().collect()
    }
}

/// A deferred task and, in the browser, the timer that will fire it.
struct PendingTask {
    task: Box<dyn FnOnce()>,
    #[cfg(feature = "hydrate")]
    timer: gloo_timers::callback::Timeout,
}

/// Single-threaded timer scheduler whose pending tasks can all be cancelled.
///
/// Cloning shares the same task table. Outside the browser no timer is
/// started; tasks wait until [`TaskScheduler::fire`] is called for them.
#[derive(Clone, Default)]
pub struct TaskScheduler {
    pending: Rc<RefCell<TaskTable<PendingTask>>>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once after `delay_ms`.
    pub fn schedule<F>(&self, delay_ms: u32, task: F) -> TaskId
    where
        F: FnOnce() + 'static,
    {
        let id = self.pending.borrow_mut().reserve();
        let task: Box<dyn FnOnce()> = Box::new(task);
        #[cfg(feature = "hydrate")]
        {
            // Weak: the table owns the timer, which owns this closure.
            let pending = Rc::downgrade(&self.pending);
            let timer = gloo_timers::callback::Timeout::new(delay_ms, move || {
                if let Some(pending) = pending.upgrade() {
                    TaskScheduler { pending }.fire(id);
                }
            });
            self.pending.borrow_mut().attach(id, PendingTask { task, timer });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay_ms;
            self.pending.borrow_mut().attach(id, PendingTask { task });
        }
        id
    }

    /// Run the task for `id` now. Returns `false` when it already ran or was
    /// cancelled.
    pub fn fire(&self, id: TaskId) -> bool {
        let entry = self.pending.borrow_mut().complete(id);
        let Some(entry) = entry else {
            return false;
        };
        #[cfg(feature = "hydrate")]
        let PendingTask { task, timer: _timer } = entry;
        #[cfg(not(feature = "hydrate"))]
        let PendingTask { task } = entry;
        task();
        true
    }

    /// Drop every pending task and its timer. Returns how many were cancelled.
    pub fn cancel_all(&self) -> usize {
        let tasks = self.pending.borrow_mut().drain();
        tasks.len()
    }
}
