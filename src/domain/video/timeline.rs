// SPDX-License-Identifier: MPL-2.0
//! Conversions between track percentages and media time.
//!
//! Both directions return `None` when the duration is zero, negative or not
//! finite, so callers no-op instead of dividing by zero.

use super::Percentage;

/// Returns `duration` if it can be used as a divisor.
fn usable_duration(duration_secs: f64) -> Option<f64> {
    (duration_secs.is_finite() && duration_secs > 0.0).then_some(duration_secs)
}

/// Converts a track percentage to a time in seconds within `[0, duration]`.
#[must_use]
pub fn time_at(percentage: Percentage, duration_secs: f64) -> Option<f64> {
    let duration = usable_duration(duration_secs)?;
    Some((percentage.value() * duration).clamp(0.0, duration))
}

/// Converts a time in seconds to a track percentage.
///
/// Times outside `[0, duration]` are clamped.
#[must_use]
pub fn percentage_of(time_secs: f64, duration_secs: f64) -> Option<Percentage> {
    let duration = usable_duration(duration_secs)?;
    let time = if time_secs.is_nan() { 0.0 } else { time_secs };
    Some(Percentage::new(time / duration))
}
