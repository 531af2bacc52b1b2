// SPDX-License-Identifier: MPL-2.0
//! Shared harness for the overlay integration tests.
//!
//! Drives a [`ControlOverlay`] on a [`DeadlineTimer`] with a virtual clock and
//! records every callback it triggers.

#![allow(dead_code)]

use scrub_chrome::config::ControlSettings;
use scrub_chrome::controls::{dispatch, ControlHost, ControlOverlay, Message};
use scrub_chrome::domain::video::{PlaybackClock, VideoStatus};
use scrub_chrome::timer::DeadlineTimer;
use std::time::{Duration, Instant};

pub const MS: Duration = Duration::from_millis(1);

/// Callback host that remembers everything.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub seeks: Vec<f64>,
    pub previews: Vec<f64>,
    pub seeking: Vec<bool>,
    pub hidden: Vec<bool>,
    pub play_pause: usize,
}

impl ControlHost for RecordingHost {
    fn on_seek(&mut self, time_secs: f64) {
        self.seeks.push(time_secs);
    }

    fn on_time_preview(&mut self, time_secs: f64) {
        self.previews.push(time_secs);
    }

    fn on_seeking_state_change(&mut self, is_seeking: bool) {
        self.seeking.push(is_seeking);
    }

    fn on_play_pause(&mut self) {
        self.play_pause += 1;
    }

    fn on_hide(&mut self, hidden: bool) {
        self.hidden.push(hidden);
    }
}

pub struct Harness {
    pub overlay: ControlOverlay<DeadlineTimer>,
    pub host: RecordingHost,
    pub now: Instant,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_settings(ControlSettings::default())
    }

    pub fn with_settings(settings: ControlSettings) -> Self {
        Self {
            overlay: ControlOverlay::new(settings, DeadlineTimer::new()),
            host: RecordingHost::default(),
            now: Instant::now(),
        }
    }

    /// Sends `message` at the current virtual time.
    pub fn send(&mut self, message: Message) {
        let effects = self.overlay.update(message, self.now);
        dispatch(effects, &mut self.host);
    }

    /// Moves virtual time forward, delivering every timer that comes due.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
        for handle in self.overlay.timer_mut().due(self.now) {
            self.send(Message::TimerFired(handle));
        }
    }

    /// Advances in `step`s for `total`, re-sending `clock` on every step the
    /// way a player does while it runs.
    pub fn run_with_clock(&mut self, clock: PlaybackClock, total: Duration, step: Duration) {
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            self.advance(step);
            self.send(Message::Clock(clock));
            elapsed += step;
        }
    }
}

pub fn loaded(position_secs: f64, duration_secs: f64, playing: bool) -> PlaybackClock {
    PlaybackClock {
        position_secs,
        duration_secs,
        buffered_secs: 0.0,
        playing,
        status: VideoStatus::Loaded,
    }
}
