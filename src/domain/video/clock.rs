// SPDX-License-Identifier: MPL-2.0
//! Snapshot of the authoritative player state.

use super::{percentage_of, Percentage, VideoStatus};

/// Authoritative playback state pushed by the external player.
///
/// The control layer only ever reads this; changes are requested through
/// seek and play/pause effects.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackClock {
    /// Current playback position in seconds.
    pub position_secs: f64,

    /// Total duration in seconds (0 when not yet known).
    pub duration_secs: f64,

    /// Furthest pre-loaded position in seconds.
    pub buffered_secs: f64,

    /// Is the media currently playing?
    pub playing: bool,

    /// Lifecycle of the media resource.
    pub status: VideoStatus,
}

impl PlaybackClock {
    /// Returns a copy with malformed values clamped to the nearest valid one.
    ///
    /// Negative or non-finite durations become 0 (unknown). Position and
    /// buffered position are clamped to `[0, duration]` when the duration is
    /// known, and to `>= 0` otherwise.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let duration = if self.duration_secs.is_finite() && self.duration_secs > 0.0 {
            self.duration_secs
        } else {
            0.0
        };
        let clamp = |secs: f64| {
            let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
            if duration > 0.0 {
                secs.min(duration)
            } else {
                secs
            }
        };
        Self {
            position_secs: clamp(self.position_secs),
            duration_secs: duration,
            buffered_secs: clamp(self.buffered_secs),
            ..self
        }
    }

    /// Returns the duration if it is known and positive.
    #[must_use]
    pub fn known_duration(&self) -> Option<f64> {
        (self.duration_secs.is_finite() && self.duration_secs > 0.0).then_some(self.duration_secs)
    }

    /// Playback progress along the track (0 when the duration is unknown).
    #[must_use]
    pub fn progress(&self) -> Percentage {
        percentage_of(self.position_secs, self.duration_secs).unwrap_or(Percentage::ZERO)
    }

    /// Buffered progress along the track. Display only.
    #[must_use]
    pub fn buffered_progress(&self) -> Percentage {
        percentage_of(self.buffered_secs, self.duration_secs).unwrap_or(Percentage::ZERO)
    }
}
