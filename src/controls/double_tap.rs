// SPDX-License-Identifier: MPL-2.0
//! Double-tap seek zones.
//!
//! One zone per side of the video surface. A second tap on the same zone
//! within the window is a double-tap (quick seek). A lone tap resolves as a
//! single tap (chrome toggle) once the window has elapsed, through a timer
//! owned by the zone. Zones never combine across sides.

use super::seek::SeekDirection;
use crate::domain::video::DoubleTapWindow;
use crate::timer::{Timer, TimerHandle, TimerKey};
use std::time::Instant;

/// Which half of the surface a zone covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneSide {
    /// Seeks backward on double-tap.
    Left,
    /// Seeks forward on double-tap.
    Right,
}

impl ZoneSide {
    /// Quick-seek direction for this side.
    #[must_use]
    pub fn direction(self) -> SeekDirection {
        match self {
            Self::Left => SeekDirection::Backward,
            Self::Right => SeekDirection::Forward,
        }
    }
}

/// Classification of a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Tap recorded and its single-tap resolution scheduled.
    ///
    /// `flushed_single` is set when an earlier tap's window had already
    /// elapsed without its timer being delivered; that tap resolves as a
    /// single tap now.
    Armed { flushed_single: bool },
    /// Second tap within the window.
    DoubleTap,
}

/// Tap disambiguation for one side.
#[derive(Debug, Clone)]
pub struct DoubleTapZone {
    side: ZoneSide,
    window: DoubleTapWindow,
    last_tap: Option<Instant>,
    pending: Option<TimerHandle>,
}

impl DoubleTapZone {
    #[must_use]
    pub fn new(side: ZoneSide, window: DoubleTapWindow) -> Self {
        Self {
            side,
            window,
            last_tap: None,
            pending: None,
        }
    }

    /// Returns true while a lone tap waits for its window to elapse.
    #[must_use]
    pub fn has_pending_tap(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_window(&mut self, window: DoubleTapWindow) {
        self.window = window;
    }

    /// Classifies a tap at `now`.
    pub fn on_tap(&mut self, now: Instant, timer: &mut impl Timer) -> TapOutcome {
        let mut flushed_single = false;
        if let Some(prior) = self.last_tap.take() {
            let had_pending = self.cancel_pending(timer);
            if now.saturating_duration_since(prior) <= self.window.as_duration() {
                tracing::debug!(side = ?self.side, "double tap");
                return TapOutcome::DoubleTap;
            }
            flushed_single = had_pending;
        }

        self.last_tap = Some(now);
        self.pending = Some(timer.schedule(
            TimerKey::SingleTap(self.side),
            now,
            self.window.as_duration(),
        ));
        TapOutcome::Armed { flushed_single }
    }

    /// A timer fired. Returns true if it resolves this zone's pending tap as
    /// a single tap; stale handles return false.
    pub fn on_timer_fired(&mut self, handle: TimerHandle) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        self.last_tap = None;
        true
    }

    /// Forgets any pending tap without resolving it. Called when a drag
    /// starts, since a drag between two taps breaks the double-tap.
    pub fn invalidate(&mut self, timer: &mut impl Timer) {
        self.cancel_pending(timer);
        self.last_tap = None;
    }

    fn cancel_pending(&mut self, timer: &mut impl Timer) -> bool {
        match self.pending.take() {
            Some(handle) => {
                timer.cancel(handle);
                true
            }
            None => false,
        }
    }
}
