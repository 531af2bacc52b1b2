// SPDX-License-Identifier: MPL-2.0
//! Timer backed by tokio tasks.

use super::{Timer, TimerHandle, TimerKey};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Timer that spawns one sleeping task per scheduled callback.
///
/// Fired handles arrive on the receiver returned by [`TokioTimer::new`].
/// Scheduling must happen inside a tokio runtime.
#[derive(Debug)]
pub struct TokioTimer {
    next_id: u64,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
    fired: mpsc::UnboundedSender<TimerHandle>,
}

impl TokioTimer {
    /// Creates a timer and the channel its fired handles are delivered on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerHandle>) {
        let (fired, receiver) = mpsc::unbounded_channel();
        let timer = Self {
            next_id: 0,
            tasks: HashMap::new(),
            fired,
        };
        (timer, receiver)
    }

    /// Number of callbacks that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Timer for TokioTimer {
    fn schedule(&mut self, key: TimerKey, _now: Instant, delay: Duration) -> TimerHandle {
        self.tasks.retain(|_, task| !task.is_finished());

        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id, key);
        let fired = self.fired.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the host shut down; nothing to deliver to.
            let _ = fired.send(handle);
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
