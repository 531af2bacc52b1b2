// SPDX-License-Identifier: MPL-2.0
//! Seek track geometry.
//!
//! Converts pointer coordinates into a normalized position along the track.
//! Two coordinate strategies are supported and agree at the percentage level:
//!
//! - [`PointerPosition::Local`]: x relative to the track's own origin, as
//!   delivered by a widget that reports cursor positions in its bounds.
//! - [`PointerPosition::Global`]: x in window space, resolved against the
//!   last measured track offset. Survives ancestors moving mid-gesture.

use crate::domain::video::Percentage;

/// Horizontal pointer coordinate in one of the two supported spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPosition {
    /// Pixels from the left edge of the track.
    Local(f32),
    /// Pixels from the left edge of the window.
    Global(f32),
}

/// Normalizes `coordinate_px` against a track spanning
/// `[track_origin_px, track_origin_px + track_width_px]`.
///
/// Returns `None` when the width is zero, negative or not finite, or when the
/// coordinate is NaN; the caller must no-op in that case.
#[must_use]
pub fn to_percentage(
    coordinate_px: f32,
    track_origin_px: f32,
    track_width_px: f32,
) -> Option<Percentage> {
    if !track_width_px.is_finite() || track_width_px <= 0.0 || coordinate_px.is_nan() {
        return None;
    }
    let offset = f64::from(coordinate_px) - f64::from(track_origin_px);
    Some(Percentage::new(offset / f64::from(track_width_px)))
}

/// Last known geometry of the seek track.
///
/// Measurements arrive asynchronously from the layout pass, so every query
/// tolerates missing data by returning `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometryTracker {
    width_px: Option<f32>,
    origin_px: Option<f32>,
}

impl GeometryTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the track width. Safe to call repeatedly (resize, rotation).
    ///
    /// Unusable widths clear the measurement rather than keep a stale one.
    pub fn on_layout(&mut self, width_px: f32) {
        self.width_px = (width_px.is_finite() && width_px > 0.0).then_some(width_px);
    }

    /// Records the track's offset in window space together with its width.
    pub fn on_measure(&mut self, origin_px: f32, width_px: f32) {
        self.on_layout(width_px);
        self.origin_px = origin_px.is_finite().then_some(origin_px);
    }

    /// Track width in pixels, if measured.
    #[must_use]
    pub fn width(&self) -> Option<f32> {
        self.width_px
    }

    /// Track offset in window space, if measured.
    #[must_use]
    pub fn origin(&self) -> Option<f32> {
        self.origin_px
    }

    /// Resolves a pointer coordinate to a track percentage.
    #[must_use]
    pub fn locate(&self, pointer: PointerPosition) -> Option<Percentage> {
        let width = self.width_px?;
        match pointer {
            PointerPosition::Local(x) => to_percentage(x, 0.0, width),
            PointerPosition::Global(x) => to_percentage(x, self.origin_px?, width),
        }
    }
}
