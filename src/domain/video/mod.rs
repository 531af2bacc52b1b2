// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains the playback clock snapshot, the media status and the
//! clamped newtypes shared by every control component.

pub mod clock;
pub mod newtypes;
pub mod status;
pub mod timeline;

// Re-export commonly used types
pub use clock::PlaybackClock;
pub use newtypes::{DoubleTapWindow, HideDelay, KeyboardSeekStep, Percentage, QuickSeekStep};
pub use status::VideoStatus;
pub use timeline::{percentage_of, time_at};
