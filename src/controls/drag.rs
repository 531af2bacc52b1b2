// SPDX-License-Identifier: MPL-2.0
//! Scrub gesture state machine.
//!
//! `Idle -> Dragging -> Idle`. The session owns the only copy of the drag
//! percentage; it is written by the gesture handlers while dragging and by
//! [`DragSession::sync_clock`] otherwise, so the displayed scrub position
//! never drifts from either source.

use super::geometry::{GeometryTracker, PointerPosition};
use crate::domain::video::{Percentage, PlaybackClock};

/// Current phase of the scrub gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Transition reported by a gesture handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Gesture began. Carries the initial position when the track width is
    /// already known.
    Started(Option<Percentage>),
    /// Pointer moved to a new position.
    Moved(Percentage),
    /// Gesture ended (released or cancelled) at this position. Exactly one per
    /// gesture.
    Finished(Percentage),
}

/// Owns the lifecycle of one scrub gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    phase: DragPhase,
    percentage: Percentage,
    geometry: GeometryTracker,
}

impl DragSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns true while a gesture is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Position the track should render: the drag position while dragging,
    /// the clock-derived position otherwise.
    #[must_use]
    pub fn display_percentage(&self) -> Percentage {
        self.percentage
    }

    /// Records a new track width. An in-flight drag uses it from the next
    /// update on; values already reported are not revisited.
    pub fn on_layout(&mut self, width_px: f32) {
        self.geometry.on_layout(width_px);
    }

    /// Records a new track offset and width in window space.
    pub fn on_measure(&mut self, origin_px: f32, width_px: f32) {
        self.geometry.on_measure(origin_px, width_px);
    }

    /// Begins a gesture. A start while already dragging is treated as a move.
    pub fn start(&mut self, pointer: PointerPosition) -> Option<DragEvent> {
        if self.is_dragging() {
            return self.update(pointer);
        }
        self.phase = DragPhase::Dragging;
        let located = self.geometry.locate(pointer);
        if let Some(percentage) = located {
            self.percentage = percentage;
        }
        tracing::debug!(?pointer, ?located, "scrub started");
        Some(DragEvent::Started(located))
    }

    /// Follows the pointer. O(1); no-op when idle or before the first layout.
    pub fn update(&mut self, pointer: PointerPosition) -> Option<DragEvent> {
        if !self.is_dragging() {
            return None;
        }
        let percentage = self.geometry.locate(pointer)?;
        self.percentage = percentage;
        Some(DragEvent::Moved(percentage))
    }

    /// Ends the gesture at the pointer, or at the last tracked position when
    /// the pointer is absent or cannot be resolved.
    pub fn release(&mut self, pointer: Option<PointerPosition>) -> Option<DragEvent> {
        if !self.is_dragging() {
            return None;
        }
        if let Some(percentage) = pointer.and_then(|p| self.geometry.locate(p)) {
            self.percentage = percentage;
        }
        self.finish()
    }

    /// Ends the gesture at the last tracked position. Same commit path as
    /// [`DragSession::release`].
    pub fn cancel(&mut self) -> Option<DragEvent> {
        if !self.is_dragging() {
            return None;
        }
        self.finish()
    }

    /// Follows the clock while idle; ignored while dragging.
    pub fn sync_clock(&mut self, clock: &PlaybackClock) {
        if !self.is_dragging() {
            self.percentage = clock.progress();
        }
    }

    fn finish(&mut self) -> Option<DragEvent> {
        self.phase = DragPhase::Idle;
        tracing::debug!(percentage = self.percentage.value(), "scrub finished");
        Some(DragEvent::Finished(self.percentage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn laid_out(width: f32) -> DragSession {
        let mut session = DragSession::new();
        session.on_layout(width);
        session
    }

    fn clock_at(position: f64, duration: f64) -> PlaybackClock {
        PlaybackClock {
            position_secs: position,
            duration_secs: duration,
            ..PlaybackClock::default()
        }
    }

    #[test]
    fn default_session_is_idle() {
        let session = DragSession::default();
        assert_eq!(session.phase(), DragPhase::Idle);
        assert!(!session.is_dragging());
        assert_abs_diff_eq!(session.display_percentage().value(), 0.0);
    }

    #[test]
    fn start_reports_initial_position() {
        let mut session = laid_out(200.0);
        let event = session.start(PointerPosition::Local(50.0));

        assert_eq!(event, Some(DragEvent::Started(Some(Percentage::new(0.25)))));
        assert!(session.is_dragging());
    }

    #[test]
    fn start_before_layout_drags_without_position() {
        let mut session = DragSession::new();
        assert_eq!(
            session.start(PointerPosition::Local(50.0)),
            Some(DragEvent::Started(None))
        );
        assert!(session.is_dragging());
        assert_eq!(session.update(PointerPosition::Local(60.0)), None);

        // Width arrives mid-gesture; updates resume.
        session.on_layout(100.0);
        assert_eq!(
            session.update(PointerPosition::Local(60.0)),
            Some(DragEvent::Moved(Percentage::new(0.6)))
        );
    }

    #[test]
    fn update_is_ignored_when_idle() {
        let mut session = laid_out(200.0);
        assert_eq!(session.update(PointerPosition::Local(100.0)), None);
    }

    #[test]
    fn release_uses_final_pointer() {
        let mut session = laid_out(200.0);
        session.start(PointerPosition::Local(20.0));
        session.update(PointerPosition::Local(80.0));

        let event = session.release(Some(PointerPosition::Local(150.0)));
        assert_eq!(event, Some(DragEvent::Finished(Percentage::new(0.75))));
        assert!(!session.is_dragging());
    }

    #[test]
    fn release_without_pointer_uses_last_tracked_value() {
        let mut session = laid_out(200.0);
        session.start(PointerPosition::Local(20.0));
        session.update(PointerPosition::Local(80.0));

        assert_eq!(
            session.release(None),
            Some(DragEvent::Finished(Percentage::new(0.4)))
        );
    }

    #[test]
    fn cancel_commits_last_tracked_value() {
        let mut session = laid_out(200.0);
        session.start(PointerPosition::Local(20.0));
        session.update(PointerPosition::Local(120.0));

        assert_eq!(
            session.cancel(),
            Some(DragEvent::Finished(Percentage::new(0.6)))
        );
        assert!(!session.is_dragging());
    }

    #[test]
    fn gesture_finishes_exactly_once() {
        let mut session = laid_out(200.0);
        session.start(PointerPosition::Local(20.0));
        assert!(session.release(None).is_some());
        assert!(session.release(None).is_none());
        assert!(session.cancel().is_none());
    }

    #[test]
    fn relayout_mid_drag_applies_to_later_updates_only() {
        let mut session = laid_out(200.0);
        session.start(PointerPosition::Local(100.0));
        assert_abs_diff_eq!(session.display_percentage().value(), 0.5);

        session.on_layout(400.0);
        assert_abs_diff_eq!(session.display_percentage().value(), 0.5);
        assert_eq!(
            session.update(PointerPosition::Local(100.0)),
            Some(DragEvent::Moved(Percentage::new(0.25)))
        );
    }

    #[test]
    fn idle_session_follows_clock() {
        let mut session = laid_out(200.0);
        session.sync_clock(&clock_at(30.0, 120.0));
        assert_abs_diff_eq!(session.display_percentage().value(), 0.25);

        session.sync_clock(&clock_at(30.0, 0.0));
        assert_abs_diff_eq!(session.display_percentage().value(), 0.0);
    }

    #[test]
    fn dragging_session_ignores_clock() {
        let mut session = laid_out(200.0);
        session.start(PointerPosition::Local(180.0));
        session.sync_clock(&clock_at(10.0, 100.0));
        assert_abs_diff_eq!(session.display_percentage().value(), 0.9);

        session.release(None);
        session.sync_clock(&clock_at(10.0, 100.0));
        assert_abs_diff_eq!(session.display_percentage().value(), 0.1);
    }

    #[test]
    fn second_start_behaves_like_move() {
        let mut session = laid_out(100.0);
        session.start(PointerPosition::Local(10.0));
        assert_eq!(
            session.start(PointerPosition::Local(30.0)),
            Some(DragEvent::Moved(Percentage::new(0.3)))
        );
    }
}
