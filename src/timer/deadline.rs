// SPDX-License-Identifier: MPL-2.0
//! Poll-driven timer.

use super::{Timer, TimerHandle, TimerKey};
use std::time::{Duration, Instant};

/// Timer that stores deadlines and reports due handles when polled.
#[derive(Debug, Clone, Default)]
pub struct DeadlineTimer {
    next_id: u64,
    pending: Vec<(Instant, TimerHandle)>,
}

impl DeadlineTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every handle whose deadline is at or before `now`,
    /// earliest first.
    pub fn due(&mut self, now: Instant) -> Vec<TimerHandle> {
        let mut fired: Vec<(Instant, TimerHandle)> = Vec::new();
        self.pending.retain(|&(deadline, handle)| {
            if deadline <= now {
                fired.push((deadline, handle));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|&(deadline, handle)| (deadline, handle.id()));
        fired.into_iter().map(|(_, handle)| handle).collect()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(deadline, _)| deadline).min()
    }

    /// Number of callbacks still pending.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of pending callbacks with the given key.
    #[must_use]
    pub fn pending_with_key(&self, key: TimerKey) -> usize {
        self.pending
            .iter()
            .filter(|(_, handle)| handle.key() == key)
            .count()
    }
}

impl Timer for DeadlineTimer {
    fn schedule(&mut self, key: TimerKey, now: Instant, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id, key);
        self.pending.push((now + delay, handle));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(_, pending)| pending != handle);
    }
}
