// SPDX-License-Identifier: MPL-2.0
//! Control overlay - gesture, seek, visibility and tap zones behind one entry point.
//!
//! The overlay owns every control component and the timer they schedule on.
//! Hosts push [`Message`]s in (pointer events, clock updates, fired timers,
//! button intents) and receive [`Effect`]s back, in the order they happened.
//! Components never reach into each other; all coordination happens here.

use super::double_tap::{DoubleTapZone, TapOutcome, ZoneSide};
use super::drag::{DragEvent, DragSession};
use super::geometry::PointerPosition;
use super::seek::{SeekCommitController, SeekDirection};
use super::status_view::{self, ChromeView, StatusInput};
use super::visibility::{HideConditions, Visibility, VisibilityScheduler};
use crate::config::ControlSettings;
use crate::domain::video::{time_at, PlaybackClock};
use crate::timer::{Timer, TimerHandle, TimerKey};
use std::time::Instant;

/// Inbound events from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // PLAYER FEED
    // ═══════════════════════════════════════════════════════════════════════
    /// Fresh snapshot of the authoritative player state.
    Clock(PlaybackClock),
    /// Host entered or left fullscreen.
    FullscreenChanged(bool),

    // ═══════════════════════════════════════════════════════════════════════
    // LAYOUT
    // ═══════════════════════════════════════════════════════════════════════
    /// Track width measured by the layout pass.
    TrackLayout { width_px: f32 },
    /// Track offset in window space and width.
    TrackMeasured { origin_px: f32, width_px: f32 },

    // ═══════════════════════════════════════════════════════════════════════
    // SCRUB GESTURE
    // ═══════════════════════════════════════════════════════════════════════
    /// Pointer pressed on the track.
    ScrubStart(PointerPosition),
    /// Pointer moved while pressed.
    ScrubMove(PointerPosition),
    /// Pointer released, with its final position when known.
    ScrubRelease(Option<PointerPosition>),
    /// Gesture terminated by the host (focus loss, arbitration, backgrounding).
    ScrubCancel,

    // ═══════════════════════════════════════════════════════════════════════
    // TAPS & TIMERS
    // ═══════════════════════════════════════════════════════════════════════
    /// Tap on one of the double-tap zones.
    ZoneTap(ZoneSide),
    /// A handle scheduled on the overlay's timer fired.
    TimerFired(TimerHandle),

    // ═══════════════════════════════════════════════════════════════════════
    // INTENTS
    // ═══════════════════════════════════════════════════════════════════════
    TogglePlayback,
    /// Explicit show/hide of the chrome.
    ToggleChrome,
    ToggleFullscreen,
    Resize,
    SubtitlePress,
    /// Arrow key seek by the keyboard step.
    SeekRelative(SeekDirection),
    /// Pointer moved over the surface without pressing.
    PointerActivity,
}

/// Outbound requests to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Seek the player to this time (seconds). Once per gesture or quick seek.
    Seek(f64),
    /// Show this time as a live label; does not move playback.
    TimePreview(f64),
    /// A scrub started (`true`) or ended (`false`).
    SeekingStateChanged(bool),
    PlayPause,
    /// Chrome was shown or hidden.
    VisibilityChanged { hidden: bool },
    Fullscreen,
    Resize,
    SubtitlePress,
}

/// Callback-style consumer of [`Effect`]s. Every method defaults to a no-op.
pub trait ControlHost {
    fn on_seek(&mut self, _time_secs: f64) {}
    fn on_time_preview(&mut self, _time_secs: f64) {}
    fn on_seeking_state_change(&mut self, _is_seeking: bool) {}
    fn on_play_pause(&mut self) {}
    fn on_hide(&mut self, _hidden: bool) {}
    fn on_fullscreen(&mut self) {}
    fn on_resize(&mut self) {}
    fn on_subtitle_press(&mut self) {}
}

/// Delivers effects to a callback host, in order.
pub fn dispatch(effects: impl IntoIterator<Item = Effect>, host: &mut impl ControlHost) {
    for effect in effects {
        match effect {
            Effect::Seek(secs) => host.on_seek(secs),
            Effect::TimePreview(secs) => host.on_time_preview(secs),
            Effect::SeekingStateChanged(seeking) => host.on_seeking_state_change(seeking),
            Effect::PlayPause => host.on_play_pause(),
            Effect::VisibilityChanged { hidden } => host.on_hide(hidden),
            Effect::Fullscreen => host.on_fullscreen(),
            Effect::Resize => host.on_resize(),
            Effect::SubtitlePress => host.on_subtitle_press(),
        }
    }
}

/// The playback control layer.
#[derive(Debug)]
pub struct ControlOverlay<T: Timer> {
    timer: T,
    settings: ControlSettings,
    clock: PlaybackClock,
    fullscreen: bool,
    drag: DragSession,
    seek: SeekCommitController,
    visibility: VisibilityScheduler,
    left_zone: DoubleTapZone,
    right_zone: DoubleTapZone,
}

impl<T: Timer> ControlOverlay<T> {
    /// Creates an overlay scheduling its callbacks on `timer`.
    pub fn new(settings: ControlSettings, timer: T) -> Self {
        Self {
            timer,
            settings,
            clock: PlaybackClock::default(),
            fullscreen: false,
            drag: DragSession::new(),
            seek: SeekCommitController::new(),
            visibility: VisibilityScheduler::new(settings.hide_delay),
            left_zone: DoubleTapZone::new(ZoneSide::Left, settings.double_tap_window),
            right_zone: DoubleTapZone::new(ZoneSide::Right, settings.double_tap_window),
        }
    }

    /// Last clock snapshot received.
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn settings(&self) -> ControlSettings {
        self.settings
    }

    /// Replaces timing settings. Pending timers keep their original deadline.
    pub fn apply_settings(&mut self, settings: ControlSettings) {
        self.settings = settings;
        self.visibility.set_hide_delay(settings.hide_delay);
        self.left_zone.set_window(settings.double_tap_window);
        self.right_zone.set_window(settings.double_tap_window);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.visibility()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable access for hosts that poll their timer.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Handles one inbound event at `now`.
    pub fn update(&mut self, message: Message, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        match message {
            Message::Clock(clock) => self.on_clock(clock, now, &mut effects),
            Message::FullscreenChanged(fullscreen) => self.fullscreen = fullscreen,
            Message::TrackLayout { width_px } => self.drag.on_layout(width_px),
            Message::TrackMeasured {
                origin_px,
                width_px,
            } => self.drag.on_measure(origin_px, width_px),
            Message::ScrubStart(pointer) => self.on_scrub_start(pointer, now, &mut effects),
            Message::ScrubMove(pointer) => {
                if let Some(event) = self.drag.update(pointer) {
                    self.on_drag_event(event, now, &mut effects);
                }
            }
            Message::ScrubRelease(pointer) => {
                if let Some(event) = self.drag.release(pointer) {
                    self.on_drag_event(event, now, &mut effects);
                }
            }
            Message::ScrubCancel => {
                if let Some(event) = self.drag.cancel() {
                    self.on_drag_event(event, now, &mut effects);
                }
            }
            Message::ZoneTap(side) => self.on_zone_tap(side, now, &mut effects),
            Message::TimerFired(handle) => self.on_timer_fired(handle, now, &mut effects),
            Message::TogglePlayback => {
                effects.push(Effect::PlayPause);
                self.interaction(now, &mut effects);
            }
            Message::ToggleChrome => {
                let changed = self.visibility.on_explicit_toggle(now, &mut self.timer);
                push_visibility(changed, &mut effects);
            }
            Message::ToggleFullscreen => {
                effects.push(Effect::Fullscreen);
                self.interaction(now, &mut effects);
            }
            Message::Resize => {
                effects.push(Effect::Resize);
                self.interaction(now, &mut effects);
            }
            Message::SubtitlePress => {
                effects.push(Effect::SubtitlePress);
                self.interaction(now, &mut effects);
            }
            Message::SeekRelative(direction) => {
                if !self.drag.is_dragging() {
                    let step = self.settings.keyboard_seek_step.value();
                    if let Some(target) = self.seek.relative(direction, step, &self.clock) {
                        effects.push(Effect::Seek(target));
                    }
                    self.interaction(now, &mut effects);
                }
            }
            Message::PointerActivity => self.interaction(now, &mut effects),
        }
        effects
    }

    /// Renderable description of the chrome for the current state.
    pub fn chrome(&self) -> ChromeView {
        let display = self.drag.display_percentage();
        let elapsed_secs = if self.drag.is_dragging() {
            self.seek.preview_secs()
        } else {
            time_at(display, self.clock.duration_secs)
        }
        .unwrap_or(self.clock.position_secs);

        status_view::compose(&StatusInput {
            status: self.clock.status,
            display_percentage: display,
            buffered_percentage: self.seek.buffered_percentage(&self.clock),
            visibility: self.visibility.visibility(),
            playing: self.clock.playing,
            fullscreen: self.fullscreen,
            scrubbing: self.drag.is_dragging(),
            elapsed_secs,
            duration_secs: self.clock.duration_secs,
        })
    }

    fn on_clock(&mut self, clock: PlaybackClock, now: Instant, effects: &mut Vec<Effect>) {
        let clock = clock.sanitized();
        if clock.status != self.clock.status {
            tracing::debug!(from = ?self.clock.status, to = ?clock.status, "video status changed");
        }
        self.clock = clock;
        self.drag.sync_clock(&clock);
        self.refresh_hide_conditions(now, effects);
    }

    fn on_scrub_start(&mut self, pointer: PointerPosition, now: Instant, effects: &mut Vec<Effect>) {
        // No transport is drawn in the error state, so there is nothing to scrub.
        if self.clock.status.is_error() && !self.drag.is_dragging() {
            return;
        }
        if let Some(event) = self.drag.start(pointer) {
            self.on_drag_event(event, now, effects);
        }
    }

    fn on_drag_event(&mut self, event: DragEvent, now: Instant, effects: &mut Vec<Effect>) {
        match event {
            DragEvent::Started(located) => {
                effects.push(Effect::SeekingStateChanged(true));
                self.left_zone.invalidate(&mut self.timer);
                self.right_zone.invalidate(&mut self.timer);
                self.interaction(now, effects);
                self.refresh_hide_conditions(now, effects);
                if let Some(percentage) = located {
                    if let Some(secs) = self.seek.preview_at(percentage, &self.clock) {
                        effects.push(Effect::TimePreview(secs));
                    }
                }
            }
            DragEvent::Moved(percentage) => {
                if let Some(secs) = self.seek.preview_at(percentage, &self.clock) {
                    effects.push(Effect::TimePreview(secs));
                }
            }
            DragEvent::Finished(percentage) => {
                if let Some(secs) = self.seek.commit(percentage, &self.clock) {
                    effects.push(Effect::Seek(secs));
                }
                effects.push(Effect::SeekingStateChanged(false));
                self.refresh_hide_conditions(now, effects);
                self.interaction(now, effects);
            }
        }
    }

    fn on_zone_tap(&mut self, side: ZoneSide, now: Instant, effects: &mut Vec<Effect>) {
        if self.drag.is_dragging() || self.clock.status.is_error() {
            return;
        }
        let zone = match side {
            ZoneSide::Left => &mut self.left_zone,
            ZoneSide::Right => &mut self.right_zone,
        };
        match zone.on_tap(now, &mut self.timer) {
            TapOutcome::DoubleTap => {
                let step = self.settings.quick_seek_step.value();
                if let Some(target) = self.seek.relative(side.direction(), step, &self.clock) {
                    effects.push(Effect::Seek(target));
                }
                self.interaction(now, effects);
            }
            TapOutcome::Armed {
                flushed_single: true,
            } => self.single_tap(now, effects),
            TapOutcome::Armed {
                flushed_single: false,
            } => {}
        }
    }

    fn on_timer_fired(&mut self, handle: TimerHandle, now: Instant, effects: &mut Vec<Effect>) {
        match handle.key() {
            TimerKey::HideChrome => {
                let changed = self.visibility.on_timer_fired(handle);
                push_visibility(changed, effects);
            }
            TimerKey::SingleTap(side) => {
                let resolved = match side {
                    ZoneSide::Left => self.left_zone.on_timer_fired(handle),
                    ZoneSide::Right => self.right_zone.on_timer_fired(handle),
                };
                if resolved {
                    self.single_tap(now, effects);
                }
            }
        }
    }

    fn single_tap(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let changed = self.visibility.on_explicit_toggle(now, &mut self.timer);
        push_visibility(changed, effects);
    }

    fn interaction(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let changed = self.visibility.on_interaction(now, &mut self.timer);
        push_visibility(changed, effects);
    }

    fn refresh_hide_conditions(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let conditions = HideConditions::from_clock(&self.clock, self.drag.is_dragging());
        let changed = self
            .visibility
            .set_conditions(conditions, now, &mut self.timer);
        push_visibility(changed, effects);
    }
}

fn push_visibility(changed: Option<Visibility>, effects: &mut Vec<Effect>) {
    if let Some(visibility) = changed {
        effects.push(Effect::VisibilityChanged {
            hidden: visibility.is_hidden(),
        });
    }
}
