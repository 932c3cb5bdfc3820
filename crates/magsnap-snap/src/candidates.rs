//! Snap-candidate generation.
//!
//! Every candidate is expressed as a target *top-left* coordinate for the
//! dragged element on one axis, so the resolver can compare it directly with
//! the pointer-derived raw position. The [`Anchor`] records which feature of
//! the dragged element lands on the guide line, which lets the visualizer
//! recover the line coordinate without re-deriving the alignment.

use magsnap_core::{Axis, CanvasBounds, DraggedElement, ElementId, Rect, SiblingElement};
use serde::{Deserialize, Serialize};

use crate::tuning::SnapTuning;

/// Base strength of slide-center candidates.
pub const SLIDE_CENTER_STRENGTH: f64 = 1.0;
/// Base strength of margin candidates.
pub const MARGIN_STRENGTH: f64 = 0.9;
/// Base strength of edge-to-edge alignment candidates.
pub const EDGE_ALIGNMENT_STRENGTH: f64 = 0.8;
/// Base strength of center-to-center alignment candidates.
pub const CENTER_ALIGNMENT_STRENGTH: f64 = 0.9;
/// Base strength of spacing candidates.
pub const SPACING_STRENGTH: f64 = 0.7;

/// Semantic category of a candidate, ordered by resolver priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideKind {
    SlideCenter,
    Margin,
    ElementAlignment,
    Spacing,
}

impl GuideKind {
    /// Tie-break rank; higher wins.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::SlideCenter => 4,
            Self::Margin => 3,
            Self::ElementAlignment => 2,
            Self::Spacing => 1,
        }
    }

    /// Factor applied on top of the base magnetic strength.
    #[must_use]
    pub const fn magnetic_multiplier(self) -> f64 {
        match self {
            Self::SlideCenter => 2.0,
            Self::Margin => 1.8,
            Self::ElementAlignment => 1.5,
            Self::Spacing => 1.2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlideCenter => "slide-center",
            Self::Margin => "margin",
            Self::ElementAlignment => "element-alignment",
            Self::Spacing => "spacing",
        }
    }
}

/// Which feature of the dragged element a candidate aligns to the guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Left or top edge.
    Start,
    Center,
    /// Right or bottom edge.
    End,
}

impl Anchor {
    /// Offset from the element's leading edge to the anchored feature.
    #[must_use]
    pub fn offset(self, extent: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => extent / 2.0,
            Self::End => extent,
        }
    }
}

/// One target position on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapCandidate {
    pub axis: Axis,
    /// Target leading-edge coordinate for the dragged element.
    pub value: f64,
    pub kind: GuideKind,
    /// Base weight in `0..=1`.
    pub strength: f64,
    pub anchor: Anchor,
    /// Sibling that produced the candidate; `None` for canvas guides.
    pub source: Option<ElementId>,
}

impl SnapCandidate {
    /// Coordinate of the guide line drawn for this candidate.
    #[must_use]
    pub fn guide_line(&self, dragged: &Rect) -> f64 {
        self.value + self.anchor.offset(dragged.extent(self.axis))
    }
}

/// Enumerate every alignment position the dragged element could lock onto.
///
/// The result is unordered and may contain duplicates from different sources.
/// An invalid dragged element or canvas produces no candidates; invalid
/// siblings and siblings sharing the dragged element's id are skipped.
#[must_use]
pub fn generate_candidates(
    dragged: &DraggedElement,
    siblings: &[SiblingElement],
    canvas: &CanvasBounds,
    tuning: &SnapTuning,
) -> Vec<SnapCandidate> {
    if !dragged.rect.is_valid() || !canvas.is_valid() {
        magsnap_core::warn!(
            id = dragged.id.get(),
            "invalid dragged element or canvas; no snap candidates"
        );
        return Vec::new();
    }

    let rect = &dragged.rect;
    let mut out = Vec::with_capacity(
        2 + tuning.margins.len() * 4 + siblings.len() * (10 + tuning.spacing_steps.len() * 2),
    );

    for axis in Axis::ALL {
        out.push(SnapCandidate {
            axis,
            value: canvas.center(axis) - rect.extent(axis) / 2.0,
            kind: GuideKind::SlideCenter,
            strength: SLIDE_CENTER_STRENGTH,
            anchor: Anchor::Center,
            source: None,
        });
    }

    for &margin in &tuning.margins {
        for axis in Axis::ALL {
            let near = SnapCandidate {
                axis,
                value: margin,
                kind: GuideKind::Margin,
                strength: MARGIN_STRENGTH,
                anchor: Anchor::Start,
                source: None,
            };
            let far = SnapCandidate {
                value: canvas.extent(axis) - margin - rect.extent(axis),
                anchor: Anchor::End,
                ..near
            };
            out.push(near);
            out.push(far);
        }
    }

    for sibling in siblings {
        if sibling.id == dragged.id || !sibling.rect.is_valid() {
            continue;
        }
        push_alignment(&mut out, rect, sibling, tuning.adjacency_candidates);
        push_spacing(&mut out, rect, sibling, &tuning.spacing_steps);
    }

    magsnap_core::trace!(
        id = dragged.id.get(),
        siblings = siblings.len(),
        candidates = out.len(),
        "generated snap candidates"
    );
    out
}

fn push_alignment(
    out: &mut Vec<SnapCandidate>,
    dragged: &Rect,
    sibling: &SiblingElement,
    adjacency: bool,
) {
    let other = &sibling.rect;
    for axis in Axis::ALL {
        let extent = dragged.extent(axis);
        let edge = SnapCandidate {
            axis,
            value: other.start(axis),
            kind: GuideKind::ElementAlignment,
            strength: EDGE_ALIGNMENT_STRENGTH,
            anchor: Anchor::Start,
            source: Some(sibling.id),
        };
        out.push(edge);
        out.push(SnapCandidate {
            value: other.end(axis) - extent,
            anchor: Anchor::End,
            ..edge
        });
        out.push(SnapCandidate {
            value: other.center(axis) - extent / 2.0,
            strength: CENTER_ALIGNMENT_STRENGTH,
            anchor: Anchor::Center,
            ..edge
        });
        if adjacency {
            // Dragged leading edge against the sibling's trailing edge, and vice versa.
            out.push(SnapCandidate {
                value: other.end(axis),
                ..edge
            });
            out.push(SnapCandidate {
                value: other.start(axis) - extent,
                anchor: Anchor::End,
                ..edge
            });
        }
    }
}

fn push_spacing(
    out: &mut Vec<SnapCandidate>,
    dragged: &Rect,
    sibling: &SiblingElement,
    steps: &[f64],
) {
    let other = &sibling.rect;
    for axis in Axis::ALL {
        if other.end(axis) >= dragged.start(axis) {
            continue;
        }
        for &step in steps {
            out.push(SnapCandidate {
                axis,
                value: other.end(axis) + step,
                kind: GuideKind::Spacing,
                strength: SPACING_STRENGTH,
                anchor: Anchor::Start,
                source: Some(sibling.id),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magsnap_core::Element;

    fn dragged(x: f64, y: f64) -> DraggedElement {
        Element::new(ElementId::new(1), Rect::new(x, y, 200.0, 100.0))
    }

    fn values(candidates: &[SnapCandidate], axis: Axis, kind: GuideKind) -> Vec<f64> {
        candidates
            .iter()
            .filter(|c| c.axis == axis && c.kind == kind)
            .map(|c| c.value)
            .collect()
    }

    #[test]
    fn empty_slide_yields_center_and_margins_only() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let out = generate_candidates(&dragged(500.0, 500.0), &[], &canvas, &SnapTuning::default());
        assert_eq!(out.len(), 14);
        assert_eq!(values(&out, Axis::X, GuideKind::SlideCenter), vec![860.0]);
        assert_eq!(values(&out, Axis::Y, GuideKind::SlideCenter), vec![490.0]);
        assert_eq!(
            values(&out, Axis::X, GuideKind::Margin),
            vec![20.0, 1700.0, 40.0, 1680.0, 60.0, 1660.0]
        );
        assert_eq!(
            values(&out, Axis::Y, GuideKind::Margin),
            vec![20.0, 960.0, 40.0, 940.0, 60.0, 920.0]
        );
        assert!(out.iter().all(|c| c.source.is_none()));
    }

    #[test]
    fn sibling_alignment_covers_edges_centers_and_adjacency() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let sibling = Element::new(ElementId::new(2), Rect::new(1000.0, 600.0, 100.0, 50.0));
        let out = generate_candidates(
            &dragged(100.0, 100.0),
            &[sibling],
            &canvas,
            &SnapTuning::default(),
        );
        let xs = values(&out, Axis::X, GuideKind::ElementAlignment);
        // left-left, right-right, center-center, left-to-right, right-to-left
        assert_eq!(xs, vec![1000.0, 900.0, 950.0, 1100.0, 800.0]);
        let ys = values(&out, Axis::Y, GuideKind::ElementAlignment);
        assert_eq!(ys, vec![600.0, 550.0, 575.0, 650.0, 500.0]);
        let center = out
            .iter()
            .find(|c| c.kind == GuideKind::ElementAlignment && c.anchor == Anchor::Center)
            .expect("center candidate");
        assert_eq!(center.strength, CENTER_ALIGNMENT_STRENGTH);
        assert_eq!(center.source, Some(ElementId::new(2)));
        // Sibling lies after the dragged element: no spacing candidates.
        assert!(values(&out, Axis::X, GuideKind::Spacing).is_empty());
    }

    #[test]
    fn adjacency_can_be_disabled() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let sibling = Element::new(ElementId::new(2), Rect::new(1000.0, 600.0, 100.0, 50.0));
        let tuning = SnapTuning {
            adjacency_candidates: false,
            ..SnapTuning::default()
        };
        let out = generate_candidates(&dragged(100.0, 100.0), &[sibling], &canvas, &tuning);
        assert_eq!(values(&out, Axis::X, GuideKind::ElementAlignment).len(), 3);
        assert_eq!(values(&out, Axis::Y, GuideKind::ElementAlignment).len(), 3);
    }

    #[test]
    fn spacing_candidates_only_for_siblings_before_dragged() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let before = Element::new(ElementId::new(2), Rect::new(100.0, 100.0, 100.0, 100.0));
        let out = generate_candidates(
            &dragged(400.0, 150.0),
            &[before],
            &canvas,
            &SnapTuning::default(),
        );
        assert_eq!(
            values(&out, Axis::X, GuideKind::Spacing),
            vec![208.0, 216.0, 224.0, 232.0, 248.0]
        );
        // Vertically overlapping: sibling bottom (200) is not above dragged top (150).
        assert!(values(&out, Axis::Y, GuideKind::Spacing).is_empty());
    }

    #[test]
    fn skips_self_and_invalid_siblings() {
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let me = dragged(10.0, 10.0);
        let broken = Element::new(ElementId::new(3), Rect::new(0.0, 0.0, 0.0, 10.0));
        let out = generate_candidates(&me, &[me, broken], &canvas, &SnapTuning::default());
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn oversized_element_keeps_negative_margin_candidates() {
        let canvas = CanvasBounds::new(100.0, 100.0);
        let big = Element::new(ElementId::new(1), Rect::new(0.0, 0.0, 300.0, 300.0));
        let out = generate_candidates(&big, &[], &canvas, &SnapTuning::default());
        assert!(out.iter().any(|c| c.kind == GuideKind::Margin && c.value < 0.0));
        assert_eq!(values(&out, Axis::X, GuideKind::SlideCenter), vec![-100.0]);
    }

    #[test]
    fn invalid_inputs_yield_nothing() {
        let tuning = SnapTuning::default();
        let bad_canvas = CanvasBounds::new(0.0, 1080.0);
        assert!(generate_candidates(&dragged(0.0, 0.0), &[], &bad_canvas, &tuning).is_empty());
        let bad = Element::new(ElementId::new(1), Rect::new(0.0, 0.0, f64::NAN, 10.0));
        assert!(generate_candidates(&bad, &[], &CanvasBounds::default(), &tuning).is_empty());
    }

    #[test]
    fn guide_line_applies_anchor_offset() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let canvas = CanvasBounds::new(1920.0, 1080.0);
        let out = generate_candidates(
            &Element::new(ElementId::new(1), rect),
            &[],
            &canvas,
            &SnapTuning::default(),
        );
        let center_x = out
            .iter()
            .find(|c| c.kind == GuideKind::SlideCenter && c.axis == Axis::X)
            .expect("slide center");
        assert_eq!(center_x.guide_line(&rect), 960.0);
        let right_margin = out
            .iter()
            .find(|c| c.kind == GuideKind::Margin && c.axis == Axis::X && c.anchor == Anchor::End)
            .expect("right margin");
        assert_eq!(right_margin.guide_line(&rect), 1900.0);
    }

    #[test]
    fn priority_follows_multiplier_order() {
        let mut kinds = [
            GuideKind::Spacing,
            GuideKind::ElementAlignment,
            GuideKind::SlideCenter,
            GuideKind::Margin,
        ];
        kinds.sort_by_key(|k| std::cmp::Reverse(k.priority()));
        assert_eq!(
            kinds,
            [
                GuideKind::SlideCenter,
                GuideKind::Margin,
                GuideKind::ElementAlignment,
                GuideKind::Spacing
            ]
        );
        for pair in kinds.windows(2) {
            assert!(pair[0].magnetic_multiplier() > pair[1].magnetic_multiplier());
        }
    }
}
