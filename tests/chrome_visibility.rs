// SPDX-License-Identifier: MPL-2.0
//! Auto-hide timing and double-tap zones through the control overlay.

mod common;

use common::{loaded, Harness, MS};
use scrub_chrome::config::ControlSettings;
use scrub_chrome::controls::{Message, PointerPosition, Visibility, ZoneSide};
use scrub_chrome::domain::video::{HideDelay, PlaybackClock, VideoStatus};
use scrub_chrome::timer::TimerKey;
use std::time::Duration;

const HIDE_DELAY: Duration = Duration::from_millis(3_000);

fn playing_harness() -> Harness {
    let mut h = Harness::new();
    h.send(Message::TrackLayout { width_px: 200.0 });
    h.send(Message::Clock(loaded(10.0, 120.0, true)));
    h
}

#[test]
fn rapid_interactions_leave_one_timer_and_hide_once() {
    let mut h = playing_harness();

    for _ in 0..10 {
        h.send(Message::PointerActivity);
        h.advance(100 * MS);
    }
    assert_eq!(h.overlay.timer().pending_with_key(TimerKey::HideChrome), 1);

    // Last interaction happened 100ms ago.
    h.advance(HIDE_DELAY - 101 * MS);
    assert_eq!(h.overlay.visibility(), Visibility::Visible);
    h.advance(MS);
    assert_eq!(h.overlay.visibility(), Visibility::Hidden);

    h.advance(Duration::from_secs(30));
    assert_eq!(h.host.hidden, vec![true]);
}

#[test]
fn playing_without_interaction_hides_exactly_once() {
    let mut h = playing_harness();
    let clock = loaded(10.0, 120.0, true);

    h.run_with_clock(clock, HIDE_DELAY + Duration::from_secs(10), 100 * MS);

    assert_eq!(h.overlay.visibility(), Visibility::Hidden);
    assert_eq!(h.host.hidden, vec![true]);
}

#[test]
fn paused_never_auto_hides() {
    let mut h = Harness::new();
    let paused = loaded(10.0, 120.0, false);
    h.send(Message::Clock(paused));
    h.send(Message::PointerActivity);

    h.run_with_clock(paused, Duration::from_secs(60), 250 * MS);

    assert_eq!(h.overlay.visibility(), Visibility::Visible);
    assert!(h.host.hidden.is_empty());
    assert_eq!(h.overlay.timer().pending_with_key(TimerKey::HideChrome), 0);
}

#[test]
fn loading_and_error_pin_the_chrome() {
    for status in [VideoStatus::Loading, VideoStatus::Error] {
        let mut h = Harness::new();
        let clock = PlaybackClock {
            status,
            ..loaded(0.0, 120.0, true)
        };
        h.send(Message::Clock(clock));
        h.send(Message::PointerActivity);
        h.run_with_clock(clock, Duration::from_secs(10), 500 * MS);
        assert_eq!(h.overlay.visibility(), Visibility::Visible);
    }
}

#[test]
fn pausing_reveals_hidden_chrome() {
    let mut h = playing_harness();
    h.advance(HIDE_DELAY);
    assert_eq!(h.host.hidden, vec![true]);

    h.send(Message::Clock(loaded(13.0, 120.0, false)));
    assert_eq!(h.host.hidden, vec![true, false]);
    assert_eq!(h.overlay.visibility(), Visibility::Visible);
}

#[test]
fn resuming_rearms_the_timer() {
    let mut h = Harness::new();
    h.send(Message::Clock(loaded(10.0, 120.0, false)));
    h.advance(Duration::from_secs(10));

    h.send(Message::Clock(loaded(10.0, 120.0, true)));
    h.advance(HIDE_DELAY);
    assert_eq!(h.host.hidden, vec![true]);
}

#[test]
fn scrubbing_holds_the_chrome_open() {
    let mut h = playing_harness();
    h.send(Message::ScrubStart(PointerPosition::Local(50.0)));
    h.run_with_clock(loaded(10.0, 120.0, true), Duration::from_secs(10), 100 * MS);
    assert_eq!(h.overlay.visibility(), Visibility::Visible);

    h.send(Message::ScrubRelease(None));
    h.send(Message::Clock(loaded(30.0, 120.0, true)));
    h.advance(HIDE_DELAY);
    assert_eq!(h.host.hidden, vec![true]);
}

#[test]
fn custom_hide_delay_is_honored() {
    let settings = ControlSettings {
        hide_delay: HideDelay::from_millis(1_500),
        ..ControlSettings::default()
    };
    let mut h = Harness::with_settings(settings);
    h.send(Message::Clock(loaded(0.0, 60.0, true)));

    h.advance(1_499 * MS);
    assert_eq!(h.overlay.visibility(), Visibility::Visible);
    h.advance(MS);
    assert_eq!(h.overlay.visibility(), Visibility::Hidden);
}

#[test]
fn double_tap_within_window_seeks_without_toggling() {
    let mut h = playing_harness();

    h.send(Message::ZoneTap(ZoneSide::Right));
    h.advance(120 * MS);
    h.send(Message::ZoneTap(ZoneSide::Right));
    h.advance(Duration::from_secs(1));

    assert_eq!(h.host.seeks, vec![20.0]);
    assert!(h.host.hidden.is_empty());
}

#[test]
fn double_tap_on_hidden_chrome_reveals_it_once() {
    let mut h = playing_harness();
    h.advance(HIDE_DELAY);
    assert_eq!(h.overlay.visibility(), Visibility::Hidden);

    h.send(Message::ZoneTap(ZoneSide::Right));
    h.advance(120 * MS);
    h.send(Message::ZoneTap(ZoneSide::Right));
    h.advance(Duration::from_secs(1));

    assert_eq!(h.host.seeks, vec![20.0]);
    // The quick seek counts as an interaction: shown again, never toggled back.
    assert_eq!(h.host.hidden, vec![true, false]);
    assert_eq!(h.overlay.visibility(), Visibility::Visible);
}

#[test]
fn left_double_tap_seeks_backward_and_clamps() {
    let mut h = Harness::new();
    h.send(Message::Clock(loaded(4.0, 120.0, false)));

    h.send(Message::ZoneTap(ZoneSide::Left));
    h.advance(200 * MS);
    h.send(Message::ZoneTap(ZoneSide::Left));

    assert_eq!(h.host.seeks, vec![0.0]);
}

#[test]
fn slow_taps_toggle_twice() {
    let mut h = playing_harness();

    h.send(Message::ZoneTap(ZoneSide::Left));
    h.advance(400 * MS);
    h.send(Message::ZoneTap(ZoneSide::Left));
    h.advance(400 * MS);

    assert!(h.host.seeks.is_empty());
    assert_eq!(h.host.hidden, vec![true, false]);
}

#[test]
fn late_second_tap_flushes_the_first_as_single() {
    let mut h = playing_harness();

    h.send(Message::ZoneTap(ZoneSide::Left));
    // Timer not delivered yet: the host polls late.
    h.now += 450 * MS;
    h.send(Message::ZoneTap(ZoneSide::Left));

    assert!(h.host.seeks.is_empty());
    assert_eq!(h.host.hidden, vec![true]);
}

#[test]
fn taps_on_different_zones_never_pair() {
    let mut h = playing_harness();

    h.send(Message::ZoneTap(ZoneSide::Left));
    h.advance(100 * MS);
    h.send(Message::ZoneTap(ZoneSide::Right));
    h.advance(Duration::from_secs(1));

    assert!(h.host.seeks.is_empty());
    // Two independent single taps.
    assert_eq!(h.host.hidden, vec![true, false]);
}

#[test]
fn drag_between_taps_breaks_the_pair() {
    let mut h = playing_harness();

    h.send(Message::ZoneTap(ZoneSide::Right));
    h.advance(50 * MS);
    h.send(Message::ScrubStart(PointerPosition::Local(100.0)));
    h.send(Message::ScrubRelease(None));
    h.advance(50 * MS);
    h.send(Message::ZoneTap(ZoneSide::Right));
    h.advance(Duration::from_secs(1));

    // Only the scrub commit; the second tap resolves alone.
    assert_eq!(h.host.seeks, vec![60.0]);
    assert_eq!(h.host.hidden, vec![true]);
}

#[test]
fn explicit_toggle_hides_paused_chrome_until_interaction() {
    let mut h = Harness::new();
    let paused = loaded(10.0, 120.0, false);
    h.send(Message::Clock(paused));

    h.send(Message::ToggleChrome);
    h.run_with_clock(paused, Duration::from_secs(5), 500 * MS);
    assert_eq!(h.overlay.visibility(), Visibility::Hidden);

    h.send(Message::PointerActivity);
    assert_eq!(h.host.hidden, vec![true, false]);
}
