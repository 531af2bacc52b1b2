// SPDX-License-Identifier: MPL-2.0
//! Chrome visibility state machine.
//!
//! `Visible <-> Hidden`, starting `Visible`. Auto-hide runs only while the
//! media is loaded, playing and not being scrubbed; in every other condition
//! the chrome is pinned visible and no timer is pending.
//!
//! At most one hide timer is outstanding. Every (re)schedule cancels the
//! previous handle first, and a fired handle that is not the pending one is
//! ignored.

use crate::domain::video::{HideDelay, PlaybackClock, VideoStatus};
use crate::timer::{Timer, TimerHandle, TimerKey};
use std::time::Instant;

/// Whether the overlay chrome is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Inputs that decide whether the chrome may hide on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HideConditions {
    pub playing: bool,
    pub status: VideoStatus,
    pub scrubbing: bool,
}

impl HideConditions {
    /// Conditions derived from a clock snapshot and the gesture state.
    #[must_use]
    pub fn from_clock(clock: &PlaybackClock, scrubbing: bool) -> Self {
        Self {
            playing: clock.playing,
            status: clock.status,
            scrubbing,
        }
    }

    /// Returns true if an idle timeout may hide the chrome.
    #[must_use]
    pub fn allows_auto_hide(&self) -> bool {
        self.playing && self.status.is_loaded() && !self.scrubbing
    }
}

/// Owns the chrome visibility and its single hide timer.
#[derive(Debug, Clone)]
pub struct VisibilityScheduler {
    visibility: Visibility,
    pending: Option<TimerHandle>,
    hide_delay: HideDelay,
    conditions: HideConditions,
}

impl Default for VisibilityScheduler {
    fn default() -> Self {
        Self::new(HideDelay::default())
    }
}

impl VisibilityScheduler {
    #[must_use]
    pub fn new(hide_delay: HideDelay) -> Self {
        Self {
            visibility: Visibility::Visible,
            pending: None,
            hide_delay,
            conditions: HideConditions::default(),
        }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }

    /// Handle of the pending hide timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    #[must_use]
    pub fn hide_delay(&self) -> HideDelay {
        self.hide_delay
    }

    /// Changes the idle delay. Takes effect from the next schedule.
    pub fn set_hide_delay(&mut self, hide_delay: HideDelay) {
        self.hide_delay = hide_delay;
    }

    /// Any user interaction: show the chrome and restart the idle timeout.
    ///
    /// Returns the new visibility if it changed.
    pub fn on_interaction(&mut self, now: Instant, timer: &mut impl Timer) -> Option<Visibility> {
        let changed = self.set_visibility(Visibility::Visible);
        self.reschedule(now, timer);
        changed
    }

    /// Explicit show/hide request (single tap on the video surface).
    pub fn on_explicit_toggle(
        &mut self,
        now: Instant,
        timer: &mut impl Timer,
    ) -> Option<Visibility> {
        match self.visibility {
            Visibility::Visible => {
                self.cancel_pending(timer);
                self.set_visibility(Visibility::Hidden)
            }
            Visibility::Hidden => self.on_interaction(now, timer),
        }
    }

    /// Updates the auto-hide conditions.
    ///
    /// Entering a pinned condition cancels the timer and reveals hidden
    /// chrome. Leaving one arms the timer if the chrome is visible. Repeating
    /// the same conditions (every clock tick) changes nothing.
    pub fn set_conditions(
        &mut self,
        conditions: HideConditions,
        now: Instant,
        timer: &mut impl Timer,
    ) -> Option<Visibility> {
        let was_allowed = self.conditions.allows_auto_hide();
        self.conditions = conditions;

        if !conditions.allows_auto_hide() {
            self.cancel_pending(timer);
            if was_allowed {
                return self.set_visibility(Visibility::Visible);
            }
            return None;
        }
        if !was_allowed && self.visibility == Visibility::Visible {
            self.reschedule(now, timer);
        }
        None
    }

    /// A timer fired. Stale handles are ignored.
    pub fn on_timer_fired(&mut self, handle: TimerHandle) -> Option<Visibility> {
        if self.pending != Some(handle) {
            tracing::debug!(id = handle.id(), "stale hide timer ignored");
            return None;
        }
        self.pending = None;
        if !self.conditions.allows_auto_hide() {
            return None;
        }
        self.set_visibility(Visibility::Hidden)
    }

    fn reschedule(&mut self, now: Instant, timer: &mut impl Timer) {
        self.cancel_pending(timer);
        if self.conditions.allows_auto_hide() {
            self.pending = Some(timer.schedule(
                TimerKey::HideChrome,
                now,
                self.hide_delay.as_duration(),
            ));
        }
    }

    fn cancel_pending(&mut self, timer: &mut impl Timer) {
        if let Some(handle) = self.pending.take() {
            timer.cancel(handle);
        }
    }

    fn set_visibility(&mut self, visibility: Visibility) -> Option<Visibility> {
        if self.visibility == visibility {
            return None;
        }
        tracing::debug!(?visibility, "chrome visibility changed");
        self.visibility = visibility;
        Some(visibility)
    }
}
