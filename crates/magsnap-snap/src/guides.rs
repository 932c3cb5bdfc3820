//! Guide visualization.
//!
//! Presentational only: decides which guide lines to draw for a resolved
//! position and how strongly, plus the pixel-gap badges shown next to
//! nearby siblings. Nothing here feeds back into position resolution.

use magsnap_core::{Axis, CanvasBounds, DraggedElement, ElementId, Point, Rect, SiblingElement};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::candidates::{GuideKind, SnapCandidate};
use crate::tuning::SnapTuning;

/// Gap between a badge and the far edge of the pair it measures.
pub const BADGE_OFFSET: f64 = 20.0;

/// One guide line.
///
/// An [`Axis::X`] guide is a vertical line at `x = position` spanning
/// `start..end` on the y axis; an [`Axis::Y`] guide is horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub axis: Axis,
    /// Line coordinate, rounded to whole pixels.
    pub position: f64,
    pub kind: GuideKind,
    pub distance: f64,
    pub opacity: f64,
    pub start: f64,
    pub end: f64,
    pub source: Option<ElementId>,
}

/// Pixel gap label between the dragged element and one sibling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceBadge {
    /// Axis along which the gap is measured.
    pub axis: Axis,
    pub x: f64,
    pub y: f64,
    /// Gap rounded to whole pixels.
    pub distance: f64,
    pub sibling: ElementId,
}

/// Everything drawn over the canvas for one drag frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideOverlay {
    pub guides: Vec<Guide>,
    pub badges: Vec<DistanceBadge>,
}

/// Guides within the visual tolerance of `position`, deduplicated by line.
#[must_use]
pub fn visible_guides(
    position: Point,
    dragged: &DraggedElement,
    candidates: &[SnapCandidate],
    canvas: &CanvasBounds,
    tuning: &SnapTuning,
) -> Vec<Guide> {
    if !dragged.rect.is_valid() || !position.is_finite() || !canvas.is_valid() {
        return Vec::new();
    }
    let rect = dragged.rect.with_origin(position);
    let tolerance = tuning.guide_tolerance;

    let mut guides: Vec<Guide> = Vec::new();
    let mut seen: FxHashMap<(Axis, i64), usize> = FxHashMap::default();
    for candidate in candidates {
        let distance = (position.get(candidate.axis) - candidate.value).abs();
        if distance.is_nan() || distance > tolerance {
            continue;
        }
        let line = candidate.guide_line(&rect).round();
        let guide = Guide {
            axis: candidate.axis,
            position: line,
            kind: candidate.kind,
            distance,
            opacity: (1.0 - distance / tolerance).max(tuning.guide_min_opacity),
            start: 0.0,
            end: canvas.extent(candidate.axis.cross()),
            source: candidate.source,
        };
        match seen.get(&(candidate.axis, line as i64)) {
            Some(&index) => {
                let existing = &guides[index];
                if distance < existing.distance
                    || (distance == existing.distance
                        && guide.kind.priority() > existing.kind.priority())
                {
                    guides[index] = guide;
                }
            }
            None => {
                seen.insert((candidate.axis, line as i64), guides.len());
                guides.push(guide);
            }
        }
    }

    guides.sort_by(|a, b| {
        a.axis
            .cmp(&b.axis)
            .then_with(|| a.position.total_cmp(&b.position))
    });
    guides
}

/// Gap badges between `dragged` and each sibling within the badge range.
#[must_use]
pub fn distance_badges(
    dragged: &Rect,
    siblings: &[SiblingElement],
    tuning: &SnapTuning,
) -> Vec<DistanceBadge> {
    if !dragged.is_valid() {
        return Vec::new();
    }
    let in_range = |gap: f64| gap > 0.0 && gap <= tuning.badge_max_distance;
    let mut badges = Vec::new();
    for sibling in siblings.iter().filter(|s| s.rect.is_valid()) {
        let other = &sibling.rect;

        let horizontal = (dragged.left() - other.right()).abs();
        if in_range(horizontal) {
            badges.push(DistanceBadge {
                axis: Axis::X,
                x: dragged.left().min(other.right()) + horizontal / 2.0,
                y: dragged.bottom().max(other.bottom()) + BADGE_OFFSET,
                distance: horizontal.round(),
                sibling: sibling.id,
            });
        }

        let vertical = (dragged.top() - other.bottom()).abs();
        if in_range(vertical) {
            badges.push(DistanceBadge {
                axis: Axis::Y,
                x: dragged.right().max(other.right()) + BADGE_OFFSET,
                y: dragged.top().min(other.bottom()) + vertical / 2.0,
                distance: vertical.round(),
                sibling: sibling.id,
            });
        }
    }
    badges
}

/// Guides and badges for the dragged element placed at `position`.
#[must_use]
pub fn guide_overlay(
    position: Point,
    dragged: &DraggedElement,
    siblings: &[SiblingElement],
    candidates: &[SnapCandidate],
    canvas: &CanvasBounds,
    tuning: &SnapTuning,
) -> GuideOverlay {
    let placed = dragged.rect.with_origin(position);
    let others: Vec<SiblingElement> = siblings
        .iter()
        .filter(|s| s.id != dragged.id)
        .copied()
        .collect();
    GuideOverlay {
        guides: visible_guides(position, dragged, candidates, canvas, tuning),
        badges: distance_badges(&placed, &others, tuning),
    }
}
