// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the control layer. Constants are organized by category.
//!
//! # Categories
//!
//! - **Chrome**: Overlay auto-hide delay
//! - **Taps**: Double-tap window and quick-seek increment
//! - **Keyboard**: Arrow key seek step

// ==========================================================================
// Chrome Defaults
// ==========================================================================

/// Default idle delay before the chrome hides while playing (in milliseconds).
pub const DEFAULT_HIDE_DELAY_MS: u64 = 3_000;

/// Minimum hide delay (in milliseconds).
pub const MIN_HIDE_DELAY_MS: u64 = 1_000;

/// Maximum hide delay (in milliseconds).
pub const MAX_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Tap Defaults
// ==========================================================================

/// Default window in which a second tap on the same zone is a double-tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum double-tap window (in milliseconds).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 150;

/// Maximum double-tap window (in milliseconds).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 600;

/// Default quick-seek increment for a double-tap (in seconds).
pub const DEFAULT_QUICK_SEEK_SECS: f64 = 10.0;

/// Minimum quick-seek increment (in seconds).
pub const MIN_QUICK_SEEK_SECS: f64 = 1.0;

/// Maximum quick-seek increment (in seconds).
pub const MAX_QUICK_SEEK_SECS: f64 = 60.0;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Default arrow key seek step (in seconds).
pub const DEFAULT_KEYBOARD_SEEK_STEP_SECS: f64 = 5.0;

/// Minimum arrow key seek step (in seconds).
pub const MIN_KEYBOARD_SEEK_STEP_SECS: f64 = 0.5;

/// Maximum arrow key seek step (in seconds).
pub const MAX_KEYBOARD_SEEK_STEP_SECS: f64 = 30.0;
