// SPDX-License-Identifier: MPL-2.0
//! Playback control layer.
//!
//! Pointer events flow through [`GeometryTracker`] (coordinate to percentage)
//! into [`DragSession`] (gesture state) and [`SeekCommitController`]
//! (previews while dragging, one commit on release). Independently, every
//! interaction feeds [`VisibilityScheduler`], and the two [`DoubleTapZone`]s
//! split taps into chrome toggles and quick seeks. [`ControlOverlay`] wires
//! them together behind one `Message -> Effect` entry point, and
//! [`status_view::compose`] turns the result into a [`ChromeView`].

pub mod double_tap;
pub mod drag;
pub mod geometry;
pub mod overlay;
pub mod seek;
pub mod status_view;
pub mod visibility;

// Re-export commonly used types for convenience
pub use double_tap::{DoubleTapZone, TapOutcome, ZoneSide};
pub use drag::{DragEvent, DragPhase, DragSession};
pub use geometry::{GeometryTracker, PointerPosition};
pub use overlay::{dispatch, ControlHost, ControlOverlay, Effect, Message};
pub use seek::{SeekCommitController, SeekDirection};
pub use status_view::{format_time, BottomBar, CenterControl, ChromeView, StatusInput, TopBar};
pub use visibility::{HideConditions, Visibility, VisibilityScheduler};
