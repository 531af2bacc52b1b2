// SPDX-License-Identifier: MPL-2.0
//! The control overlay scheduling on tokio tasks instead of a polled timer.

mod common;

use common::loaded;
use scrub_chrome::config::ControlSettings;
use scrub_chrome::controls::{ControlOverlay, Effect, Message, ZoneSide};
use scrub_chrome::timer::{TimerKey, TokioTimer};
use std::time::Instant;

#[tokio::test(start_paused = true)]
async fn hide_timer_is_delivered_over_the_channel() {
    let (timer, mut fired) = TokioTimer::new();
    let mut overlay = ControlOverlay::new(ControlSettings::default(), timer);
    overlay.update(Message::Clock(loaded(0.0, 60.0, true)), Instant::now());

    let handle = fired.recv().await.expect("hide timer fired");
    assert_eq!(handle.key(), TimerKey::HideChrome);

    let effects = overlay.update(Message::TimerFired(handle), Instant::now());
    assert_eq!(effects, vec![Effect::VisibilityChanged { hidden: true }]);
}

#[tokio::test(start_paused = true)]
async fn superseded_hide_timer_never_fires() {
    let (timer, mut fired) = TokioTimer::new();
    let mut overlay = ControlOverlay::new(ControlSettings::default(), timer);
    overlay.update(Message::Clock(loaded(0.0, 60.0, true)), Instant::now());
    overlay.update(Message::PointerActivity, Instant::now());
    overlay.update(Message::PointerActivity, Instant::now());

    let handle = fired.recv().await.expect("hide timer fired");
    let effects = overlay.update(Message::TimerFired(handle), Instant::now());

    assert_eq!(effects, vec![Effect::VisibilityChanged { hidden: true }]);
    assert_eq!(overlay.timer().pending_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn single_tap_resolves_after_the_window() {
    let (timer, mut fired) = TokioTimer::new();
    let mut overlay = ControlOverlay::new(ControlSettings::default(), timer);
    overlay.update(Message::Clock(loaded(0.0, 60.0, false)), Instant::now());
    overlay.update(Message::ZoneTap(ZoneSide::Left), Instant::now());

    let handle = fired.recv().await.expect("single tap fired");
    assert_eq!(handle.key(), TimerKey::SingleTap(ZoneSide::Left));

    let effects = overlay.update(Message::TimerFired(handle), Instant::now());
    assert_eq!(effects, vec![Effect::VisibilityChanged { hidden: true }]);
}
