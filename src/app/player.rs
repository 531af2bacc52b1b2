// SPDX-License-Identifier: MPL-2.0
//! Stand-in player for the demo window.
//!
//! Advances a fake playhead on every tick, buffers ahead at a fixed rate and
//! applies seeks immediately. It reports its state only through
//! [`PlaybackClock`] snapshots, exactly like a real decoder would.

use crate::domain::video::{PlaybackClock, VideoStatus};
use std::time::{Duration, Instant};

/// Time spent in `Loading` before the media becomes playable.
pub const LOAD_TIME: Duration = Duration::from_millis(800);

/// Seconds of media buffered per second of wall time.
const BUFFER_RATE: f64 = 4.0;

/// Maximum buffered lead over the playhead.
const BUFFER_AHEAD_SECS: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    clock: PlaybackClock,
    opened_at: Instant,
    last_tick: Instant,
}

impl SimulatedPlayer {
    /// Opens a fake media of `duration_secs`, starting playback once loaded.
    pub fn open(duration_secs: f64, now: Instant) -> Self {
        Self {
            clock: PlaybackClock {
                duration_secs,
                playing: true,
                status: VideoStatus::Loading,
                ..PlaybackClock::default()
            },
            opened_at: now,
            last_tick: now,
        }
    }

    /// Current snapshot.
    pub fn clock(&self) -> PlaybackClock {
        self.clock
    }

    /// Moves the simulation forward to `now`.
    pub fn advance(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;

        match self.clock.status {
            VideoStatus::Loading => {
                if now.saturating_duration_since(self.opened_at) >= LOAD_TIME {
                    tracing::info!(duration_secs = self.clock.duration_secs, "media loaded");
                    self.clock.status = VideoStatus::Loaded;
                }
                return;
            }
            VideoStatus::Error => return,
            VideoStatus::Loaded => {}
        }

        let duration = self.clock.duration_secs;
        if self.clock.playing {
            self.clock.position_secs = (self.clock.position_secs + elapsed).min(duration);
            if self.clock.position_secs >= duration {
                tracing::info!("end of media");
                self.clock.playing = false;
            }
        }

        let lead_limit = (self.clock.position_secs + BUFFER_AHEAD_SECS).min(duration);
        self.clock.buffered_secs = (self.clock.buffered_secs + elapsed * BUFFER_RATE)
            .max(self.clock.position_secs)
            .min(lead_limit);
    }

    /// Jumps to `secs`. Jumping outside the buffered range drops the buffer.
    pub fn seek(&mut self, secs: f64) {
        let target = secs.clamp(0.0, self.clock.duration_secs.max(0.0));
        if target > self.clock.buffered_secs || target < self.clock.position_secs {
            self.clock.buffered_secs = target;
        }
        self.clock.position_secs = target;
        tracing::info!(target_secs = target, "player seek");
    }

    /// Toggles playback. Playing again from the end restarts at 0.
    pub fn toggle_playback(&mut self) {
        if !self.clock.status.is_loaded() {
            return;
        }
        if !self.clock.playing && self.clock.position_secs >= self.clock.duration_secs {
            self.seek(0.0);
        }
        self.clock.playing = !self.clock.playing;
    }

    /// Switches to the error state.
    pub fn fail(&mut self) {
        tracing::warn!("simulated playback failure");
        self.clock.status = VideoStatus::Error;
        self.clock.playing = false;
    }
}
