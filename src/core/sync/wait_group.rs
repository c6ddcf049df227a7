/*!
 * Wait Group
 *
 * Completion barrier counting outstanding units.
 *
 * # Design
 *
 * A single parking_lot `Mutex<usize>` + `Condvar` pair. Units register before
 * they are spawned and deregister when they finish, so `wait()` returns only
 * once every registered unit has run to completion.
 */

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Completion barrier for a batch of concurrent units
#[derive(Debug, Default)]
pub struct WaitGroup {
    outstanding: Mutex<usize>,
    drained: Condvar,
}

impl WaitGroup {
    /// Create an empty wait group
    pub const fn new() -> Self {
        Self {
            outstanding: Mutex::new(0),
            drained: Condvar::new(),
        }
    }

    /// Register `n` units
    #[inline]
    pub fn add(&self, n: usize) {
        *self.outstanding.lock() += n;
    }

    /// Mark one unit finished, waking waiters when the count drains
    pub fn done(&self) {
        let mut outstanding = self.outstanding.lock();
        debug_assert!(*outstanding > 0, "WaitGroup::done without matching add");
        *outstanding = outstanding.saturating_sub(1);
        if *outstanding == 0 {
            self.drained.notify_all();
        }
    }

    /// Block until every registered unit has finished
    pub fn wait(&self) {
        let mut outstanding = self.outstanding.lock();
        while *outstanding > 0 {
            self.drained.wait(&mut outstanding);
        }
    }

    /// Block until drained or `timeout` elapses
    ///
    /// Returns `true` if the group drained.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut outstanding = self.outstanding.lock();
        while *outstanding > 0 {
            if self
                .drained
                .wait_until(&mut outstanding, deadline)
                .timed_out()
            {
                return *outstanding == 0;
            }
        }
        true
    }

    /// Units registered but not yet finished
    #[inline]
    pub fn outstanding(&self) -> usize {
        *self.outstanding.lock()
    }
}
