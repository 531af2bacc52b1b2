// SPDX-License-Identifier: MPL-2.0
//! Renderable description of the chrome.
//!
//! [`compose`] is a pure function of the control state. Status precedence:
//! an error replaces every control with an error indicator, loading swaps
//! the play/pause affordance for a busy indicator, and otherwise the full
//! transport is shown unless the chrome is hidden.

use super::visibility::Visibility;
use crate::domain::video::{Percentage, VideoStatus};

/// Label shown for an unknown duration.
const UNKNOWN_TIME_LABEL: &str = "--:--";

/// Everything the chrome depends on, gathered by the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInput {
    pub status: VideoStatus,
    /// Drag position while scrubbing, clock position otherwise.
    pub display_percentage: Percentage,
    pub buffered_percentage: Percentage,
    pub visibility: Visibility,
    pub playing: bool,
    pub fullscreen: bool,
    pub scrubbing: bool,
    /// Time matching `display_percentage` (preview time while scrubbing).
    pub elapsed_secs: f64,
    /// Total duration, 0 when unknown.
    pub duration_secs: f64,
}

/// Content of the center slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterControl {
    /// Media failed; nothing else is interactive.
    ErrorIndicator,
    /// Media loading; play/pause suppressed.
    BusyIndicator,
    /// Play/pause button reflecting the current state.
    PlayPause { playing: bool },
    /// Chrome hidden.
    Empty,
}

/// Top overlay row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopBar {
    pub fullscreen: bool,
}

/// Bottom overlay row: progress track and time labels.
#[derive(Debug, Clone, PartialEq)]
pub struct BottomBar {
    pub progress: Percentage,
    pub buffered: Percentage,
    pub elapsed_label: String,
    pub duration_label: String,
    pub scrubbing: bool,
    pub fullscreen: bool,
}

/// Renderable description of the whole chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeView {
    pub center: CenterControl,
    pub top_bar: Option<TopBar>,
    pub bottom_bar: Option<BottomBar>,
    /// Whether the double-tap zones accept input.
    pub seek_zones_enabled: bool,
}

impl ChromeView {
    /// Returns true if any chrome is drawn.
    #[must_use]
    pub fn is_showing_controls(&self) -> bool {
        self.top_bar.is_some() || self.bottom_bar.is_some()
    }
}

/// Builds the chrome description for `input`.
#[must_use]
pub fn compose(input: &StatusInput) -> ChromeView {
    if input.status.is_error() {
        return ChromeView {
            center: CenterControl::ErrorIndicator,
            top_bar: None,
            bottom_bar: None,
            seek_zones_enabled: false,
        };
    }

    // Hidden chrome still lets taps through so the user can bring it back.
    if input.visibility.is_hidden() {
        return ChromeView {
            center: if input.status.is_loading() {
                CenterControl::BusyIndicator
            } else {
                CenterControl::Empty
            },
            top_bar: None,
            bottom_bar: None,
            seek_zones_enabled: true,
        };
    }

    let center = if input.status.is_loading() {
        CenterControl::BusyIndicator
    } else {
        CenterControl::PlayPause {
            playing: input.playing,
        }
    };

    let duration_known = input.duration_secs.is_finite() && input.duration_secs > 0.0;
    let duration_label = if duration_known {
        format_time(input.duration_secs)
    } else {
        UNKNOWN_TIME_LABEL.to_string()
    };

    ChromeView {
        center,
        top_bar: Some(TopBar {
            fullscreen: input.fullscreen,
        }),
        bottom_bar: Some(BottomBar {
            progress: input.display_percentage,
            buffered: input.buffered_percentage,
            elapsed_label: format_time(input.elapsed_secs),
            duration_label,
            scrubbing: input.scrubbing,
            fullscreen: input.fullscreen,
        }),
        seek_zones_enabled: true,
    }
}

/// Formats duration in MM:SS or HH:MM:SS format.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> StatusInput {
        StatusInput {
            status: VideoStatus::Loaded,
            display_percentage: Percentage::new(0.25),
            buffered_percentage: Percentage::new(0.5),
            visibility: Visibility::Visible,
            playing: true,
            fullscreen: false,
            scrubbing: false,
            elapsed_secs: 30.0,
            duration_secs: 120.0,
        }
    }

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125.0), "02:05");
    }

    #[test]
    fn format_time_handles_hours() {
        assert_eq!(format_time(3665.0), "01:01:05");
    }

    #[test]
    fn format_time_handles_negative_and_nan() {
        assert_eq!(format_time(-10.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
    }

    #[test]
    fn loaded_visible_shows_full_transport() {
        let view = compose(&loaded());
        assert_eq!(view.center, CenterControl::PlayPause { playing: true });
        assert_eq!(view.top_bar, Some(TopBar { fullscreen: false }));

        let bottom = view.bottom_bar.expect("bottom bar");
        assert_eq!(bottom.progress, Percentage::new(0.25));
        assert_eq!(bottom.buffered, Percentage::new(0.5));
        assert_eq!(bottom.elapsed_label, "00:30");
        assert_eq!(bottom.duration_label, "02:00");
        assert!(view.seek_zones_enabled);
    }

    #[test]
    fn error_overrides_everything() {
        let view = compose(&StatusInput {
            status: VideoStatus::Error,
            ..loaded()
        });
        assert_eq!(view.center, CenterControl::ErrorIndicator);
        assert!(!view.is_showing_controls());
        assert!(!view.seek_zones_enabled);
    }

    #[test]
    fn loading_suppresses_play_pause() {
        let view = compose(&StatusInput {
            status: VideoStatus::Loading,
            ..loaded()
        });
        assert_eq!(view.center, CenterControl::BusyIndicator);
        assert!(view.bottom_bar.is_some());
    }

    #[test]
    fn hidden_chrome_draws_nothing_but_keeps_zones() {
        let view = compose(&StatusInput {
            visibility: Visibility::Hidden,
            ..loaded()
        });
        assert_eq!(view.center, CenterControl::Empty);
        assert!(!view.is_showing_controls());
        assert!(view.seek_zones_enabled);
    }

    #[test]
    fn unknown_duration_uses_placeholder_label() {
        let view = compose(&StatusInput {
            duration_secs: 0.0,
            ..loaded()
        });
        assert_eq!(view.bottom_bar.unwrap().duration_label, UNKNOWN_TIME_LABEL);
    }

    #[test]
    fn paused_shows_play_affordance() {
        let view = compose(&StatusInput {
            playing: false,
            ..loaded()
        });
        assert_eq!(view.center, CenterControl::PlayPause { playing: false });
    }
}
