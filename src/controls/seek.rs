// SPDX-License-Identifier: MPL-2.0
//! Preview vs. commit decisions for seek requests.
//!
//! Previews are informational and may fire on every pointer tick. Commits
//! are the only seek requests that reach the player. Every conversion goes
//! through the clock's duration; an unknown duration drops the request
//! instead of seeking to 0 on a stream that has not started.

use crate::domain::video::{time_at, Percentage, PlaybackClock};

/// Direction of a relative seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Backward,
    Forward,
}

impl SeekDirection {
    /// Sign applied to a step.
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }
}

/// Converts gesture positions into preview times and seek targets.
#[derive(Debug, Clone, Default)]
pub struct SeekCommitController {
    /// Last preview time handed to the host while a drag is in flight.
    preview_secs: Option<f64>,
}

impl SeekCommitController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time to show as a non-committing preview for `percentage`.
    ///
    /// Never touches the clock.
    pub fn preview_at(&mut self, percentage: Percentage, clock: &PlaybackClock) -> Option<f64> {
        let time = time_at(percentage, clock.duration_secs)?;
        self.preview_secs = Some(time);
        Some(time)
    }

    /// Seek target for a finished gesture, or `None` when the duration is not
    /// known. Clears the preview either way.
    pub fn commit(&mut self, percentage: Percentage, clock: &PlaybackClock) -> Option<f64> {
        self.preview_secs = None;
        let target = time_at(percentage, clock.duration_secs);
        match target {
            Some(secs) => tracing::debug!(target_secs = secs, "seek committed"),
            None => tracing::warn!(
                percentage = percentage.value(),
                "seek dropped, duration unknown"
            ),
        }
        target
    }

    /// Seek target `step_secs` away from the current position, clamped to
    /// `[0, duration]`. Used by double-tap zones and arrow keys.
    #[must_use]
    pub fn relative(
        &self,
        direction: SeekDirection,
        step_secs: f64,
        clock: &PlaybackClock,
    ) -> Option<f64> {
        let duration = clock.known_duration()?;
        let target = clock.position_secs + direction.signum() * step_secs;
        Some(target.clamp(0.0, duration))
    }

    /// Preview time of the in-flight drag, if any.
    #[must_use]
    pub fn preview_secs(&self) -> Option<f64> {
        self.preview_secs
    }

    /// Buffered position to render. Display only; seeks are never limited to it.
    #[must_use]
    pub fn buffered_percentage(&self, clock: &PlaybackClock) -> Percentage {
        clock.buffered_progress()
    }
}
