// SPDX-License-Identifier: MPL-2.0
//! Cancelable delayed callbacks.
//!
//! The control components never sleep. They ask a [`Timer`] to schedule a
//! callback and keep the returned [`TimerHandle`]; the host feeds fired
//! handles back in. A fired handle that no longer matches the owner's pending
//! handle is stale and ignored, which is what keeps at most one hide timer
//! effective at any time.
//!
//! Two implementations are provided:
//!
//! - [`DeadlineTimer`]: stores deadlines and reports the due ones when polled.
//!   Suits tick-driven hosts (an iced `time::every` subscription) and tests.
//! - [`TokioTimer`]: one sleeping tokio task per schedule, fired handles are
//!   delivered over an mpsc channel and cancel aborts the task.

mod deadline;
mod tokio_timer;

pub use deadline::DeadlineTimer;
pub use tokio_timer::TokioTimer;

use crate::controls::ZoneSide;
use std::time::{Duration, Instant};

/// What a scheduled callback is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Idle timeout that hides the chrome.
    HideChrome,
    /// Resolution of a pending single tap on one zone.
    SingleTap(ZoneSide),
}

/// Identifies one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    id: u64,
    key: TimerKey,
}

impl TimerHandle {
    /// Creates a handle. Implementations must never reuse an id.
    #[must_use]
    pub fn new(id: u64, key: TimerKey) -> Self {
        Self { id, key }
    }

    /// Unique id within the issuing timer.
    #[must_use]
    pub fn id(self) -> u64 {
        self.id
    }

    /// Purpose of the callback.
    #[must_use]
    pub fn key(self) -> TimerKey {
        self.key
    }
}

/// A source of cancelable delayed callbacks.
pub trait Timer {
    /// Schedules a callback `delay` after `now`.
    fn schedule(&mut self, key: TimerKey, now: Instant, delay: Duration) -> TimerHandle;

    /// Cancels a pending callback. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}
