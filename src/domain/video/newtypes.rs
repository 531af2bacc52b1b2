// SPDX-License-Identifier: MPL-2.0
//! Playback control newtypes.
//!
//! This module provides type-safe wrappers for the values the control layer
//! passes around, ensuring they are always within valid ranges.

use crate::config::defaults;
use std::time::Duration;

// =============================================================================
// Percentage
// =============================================================================

/// Normalized position along the seek track, guaranteed to be within 0.0–1.0.
///
/// NaN collapses to 0.0 so malformed input never reaches a seek request.
///
/// # Example
///
/// ```
/// use scrub_chrome::domain::video::Percentage;
///
/// assert_eq!(Percentage::new(0.25).value(), 0.25);
/// assert_eq!(Percentage::new(1.7).value(), 1.0);
/// assert_eq!(Percentage::new(f64::NAN).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(f64);

impl Percentage {
    /// Start of the track.
    pub const ZERO: Self = Self(0.0);

    /// End of the track.
    pub const FULL: Self = Self(1.0);

    /// Creates a new percentage, clamping to the valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

// =============================================================================
// HideDelay
// =============================================================================

/// Idle delay before the chrome hides while playing.
///
/// Clamped to the range defined in [`defaults`] (1–30 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new hide delay in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(defaults::MIN_HIDE_DELAY_MS, defaults::MAX_HIDE_DELAY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(defaults::DEFAULT_HIDE_DELAY_MS)
    }
}

// =============================================================================
// DoubleTapWindow
// =============================================================================

/// Maximum gap between two taps on the same zone for them to count as a
/// double-tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapWindow(u64);

impl DoubleTapWindow {
    /// Creates a new window in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(
            defaults::MIN_DOUBLE_TAP_WINDOW_MS,
            defaults::MAX_DOUBLE_TAP_WINDOW_MS,
        ))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DoubleTapWindow {
    fn default() -> Self {
        Self(defaults::DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

// =============================================================================
// QuickSeekStep
// =============================================================================

/// Seconds jumped by a double-tap on a seek zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickSeekStep(f64);

impl QuickSeekStep {
    /// Creates a new quick-seek step in seconds, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(defaults::MIN_QUICK_SEEK_SECS, defaults::MAX_QUICK_SEEK_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for QuickSeekStep {
    fn default() -> Self {
        Self(defaults::DEFAULT_QUICK_SEEK_SECS)
    }
}

// =============================================================================
// KeyboardSeekStep
// =============================================================================

/// Seconds jumped by an arrow key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSeekStep(f64);

impl KeyboardSeekStep {
    /// Creates a new keyboard seek step in seconds, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(
            defaults::MIN_KEYBOARD_SEEK_STEP_SECS,
            defaults::MAX_KEYBOARD_SEEK_STEP_SECS,
        ))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for KeyboardSeekStep {
    fn default() -> Self {
        Self(defaults::DEFAULT_KEYBOARD_SEEK_STEP_SECS)
    }
}
