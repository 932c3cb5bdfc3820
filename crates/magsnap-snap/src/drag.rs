//! Drag session: the per-pointer-move snapping pipeline.
//!
//! [`DragSession`] owns the dragged element for the duration of one gesture
//! and runs generate → resolve → apply → overlay on every pointer move.
//!
//! # Invariants
//!
//! 1. The element's width and height never change during a session.
//! 2. No frame is produced until the pointer has travelled at least the
//!    activation threshold from the press point; after that, every update
//!    produces a frame.
//! 3. The applied origin is always on the canvas when the inputs are valid.
//! 4. Candidates for a move are generated from the element's position after
//!    the previous move, so spacing candidates track the live layout.

use magsnap_core::{CanvasBounds, DraggedElement, ElementId, Point, Rect, SiblingElement};
use serde::{Deserialize, Serialize};

use crate::candidates::generate_candidates;
use crate::guides::{GuideOverlay, guide_overlay};
use crate::resolver::{ResolvedPosition, SnapOutcome, resolve_position};
use crate::tuning::SnapTuning;
use crate::zones::velocity_reduction;

/// Everything the host needs to render one pointer move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragFrame {
    /// Pointer-derived origin before snapping.
    pub raw: Point,
    pub resolved: ResolvedPosition,
    /// Element bounds after the resolved origin was applied.
    pub applied: Rect,
    pub overlay: GuideOverlay,
    /// Pointer velocity multiplier at the raw origin.
    pub velocity_factor: f64,
}

impl DragFrame {
    #[must_use]
    pub fn outcome(&self) -> SnapOutcome {
        self.resolved.into()
    }
}

/// Final state reported when the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragOutcome {
    pub element: DraggedElement,
    /// Whether the pointer ever crossed the activation threshold.
    pub activated: bool,
}

/// One drag gesture from press to release.
#[derive(Debug, Clone)]
pub struct DragSession {
    element: DraggedElement,
    press: Point,
    grab_offset: Point,
    activated: bool,
}

impl DragSession {
    /// Start a gesture with the pointer pressed at `pointer` over `element`.
    #[must_use]
    pub fn begin(element: DraggedElement, pointer: Point) -> Self {
        magsnap_core::debug!(id = element.id.get(), "drag session started");
        Self {
            element,
            press: pointer,
            grab_offset: Point::new(pointer.x - element.rect.x, pointer.y - element.rect.y),
            activated: false,
        }
    }

    #[must_use]
    pub const fn element(&self) -> &DraggedElement {
        &self.element
    }

    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.element.id
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.activated
    }

    /// Process one pointer move.
    ///
    /// Returns `None` while the pointer is still within the activation
    /// threshold of the press point.
    pub fn update(
        &mut self,
        pointer: Point,
        siblings: &[SiblingElement],
        canvas: &CanvasBounds,
        tuning: &SnapTuning,
    ) -> Option<DragFrame> {
        if !self.activated {
            if self.press.distance(pointer) < tuning.drag_activation_threshold {
                return None;
            }
            self.activated = true;
            magsnap_core::trace!(id = self.element.id.get(), "drag activated");
        }

        let raw = Point::new(pointer.x - self.grab_offset.x, pointer.y - self.grab_offset.y);
        let others: Vec<SiblingElement> = siblings
            .iter()
            .filter(|s| s.id != self.element.id)
            .copied()
            .collect();
        let candidates = generate_candidates(&self.element, &others, canvas, tuning);
        let resolved = resolve_position(raw, &candidates, &self.element, canvas, tuning);

        let origin = resolved.point();
        if origin.is_finite() {
            self.element.rect = self.element.rect.with_origin(origin);
        }

        let overlay = guide_overlay(origin, &self.element, &others, &candidates, canvas, tuning);
        Some(DragFrame {
            raw,
            resolved,
            applied: self.element.rect,
            overlay,
            velocity_factor: velocity_reduction(raw, &candidates, tuning),
        })
    }

    /// Release the pointer and hand the final element back to the host.
    #[must_use]
    pub fn end(self) -> DragOutcome {
        magsnap_core::debug!(
            id = self.element.id.get(),
            activated = self.activated,
            "drag session ended"
        );
        DragOutcome {
            element: self.element,
            activated: self.activated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magsnap_core::Element;

    fn session_at(x: f64, y: f64) -> DragSession {
        let element = Element::new(ElementId::new(1), Rect::new(x, y, 200.0, 100.0));
        // Grab the element 10px inside its top-left corner.
        DragSession::begin(element, Point::new(x + 10.0, y + 10.0))
    }

    #[test]
    fn small_moves_do_not_activate() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let tuning = SnapTuning::default();
        let mut session = session_at(300.0, 300.0);
        assert!(
            session
                .update(Point::new(311.0, 311.0), &[], &canvas, &tuning)
                .is_none()
        );
        assert!(!session.is_active());
        let outcome = session.end();
        assert!(!outcome.activated);
        assert_eq!(outcome.element.rect.origin(), Point::new(300.0, 300.0));
    }

    #[test]
    fn activation_then_every_move_produces_a_frame() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let tuning = SnapTuning::default();
        let mut session = session_at(300.0, 300.0);
        let frame = session
            .update(Point::new(320.0, 310.0), &[], &canvas, &tuning)
            .expect("activated");
        assert_eq!(frame.raw, Point::new(310.0, 300.0));
        assert_eq!(frame.applied.origin(), Point::new(310.0, 300.0));
        assert!(session.is_active());
        // Move back inside the threshold: still a frame once active.
        assert!(
            session
                .update(Point::new(311.0, 310.0), &[], &canvas, &tuning)
                .is_some()
        );
    }

    #[test]
    fn pointer_near_center_locks_the_element() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let tuning = SnapTuning::default();
        let mut session = session_at(300.0, 300.0);
        let frame = session
            .update(Point::new(869.0, 499.0), &[], &canvas, &tuning)
            .expect("frame");
        assert_eq!(frame.raw, Point::new(859.0, 489.0));
        assert_eq!(frame.applied.origin(), Point::new(860.0, 490.0));
        assert!(frame.resolved.snapped_x && frame.resolved.snapped_y);
        assert_eq!(frame.overlay.guides.len(), 2);
        assert!(frame.velocity_factor < 1.0);
        assert!(frame.outcome().is_snapped);
        let outcome = session.end();
        assert_eq!(outcome.element.rect.width, 200.0);
        assert_eq!(outcome.element.rect.height, 100.0);
    }

    #[test]
    fn applied_origin_stays_on_canvas() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let tuning = SnapTuning::default();
        let mut session = session_at(300.0, 300.0);
        let frame = session
            .update(Point::new(-400.0, 5_000.0), &[], &canvas, &tuning)
            .expect("frame");
        assert_eq!(frame.applied.origin(), Point::new(0.0, 980.0));
    }

    #[test]
    fn non_finite_pointer_leaves_the_element_in_place() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let tuning = SnapTuning::default();
        let mut session = session_at(300.0, 300.0);
        let frame = session
            .update(Point::new(f64::NAN, 400.0), &[], &canvas, &tuning)
            .expect("frame");
        assert_eq!(frame.applied.origin(), Point::new(300.0, 300.0));
        assert!(!frame.resolved.in_snap_zone);
        assert!(frame.overlay.guides.is_empty());
    }

    #[test]
    fn ignores_dragged_element_in_sibling_list() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let tuning = SnapTuning::default();
        let mut session = session_at(300.0, 300.0);
        let me = *session.element();
        let frame = session
            .update(Point::new(320.0, 320.0), &[me], &canvas, &tuning)
            .expect("frame");
        // Aligning with its own stale position would have pulled it back toward 300.
        assert_eq!(frame.applied.origin(), Point::new(310.0, 310.0));
        assert!(frame.overlay.badges.is_empty());
    }
}
