//! Magnetic position resolution.
//!
//! # Algorithm
//!
//! Each axis is resolved independently:
//!
//! 1. Keep candidates on the axis whose distance to the raw coordinate is at
//!    most the snap-zone radius.
//! 2. Select the nearest; ties go to the higher [`GuideKind::priority`], then
//!    to the higher base strength, then to the earlier candidate.
//! 3. Pull the raw coordinate toward the target by
//!    `base * multiplier(kind) * (1 - distance / radius)`, clamped to `[0, 1]`.
//! 4. Within the full-snap distance the coordinate locks exactly.
//!
//! The resolved origin is then clamped so the element stays on the canvas.
//!
//! # Failure Modes
//!
//! Degenerate input (invalid element size, non-finite raw position, invalid
//! canvas) never panics: the raw position is returned unchanged and unsnapped.

use magsnap_core::{Axis, CanvasBounds, DraggedElement, Point, SiblingElement, lerp};
use serde::{Deserialize, Serialize};

use crate::candidates::{SnapCandidate, generate_candidates};
use crate::tuning::SnapTuning;

/// Per-axis magnetic displacement applied by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MagneticForce {
    pub x: f64,
    pub y: f64,
}

impl MagneticForce {
    /// Largest absolute component.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.abs().max(self.y.abs())
    }
}

/// Output of one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPosition {
    pub x: f64,
    pub y: f64,
    pub snapped_x: bool,
    pub snapped_y: bool,
    /// At least one axis had a candidate within the snap zone.
    pub in_snap_zone: bool,
    pub force: MagneticForce,
}

impl ResolvedPosition {
    /// The raw position passed through without any snapping.
    #[must_use]
    pub const fn unsnapped(raw: Point) -> Self {
        Self {
            x: raw.x,
            y: raw.y,
            snapped_x: false,
            snapped_y: false,
            in_snap_zone: false,
            force: MagneticForce { x: 0.0, y: 0.0 },
        }
    }

    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub const fn snapped(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.snapped_x,
            Axis::Y => self.snapped_y,
        }
    }
}

/// Resolution of a single axis, before canvas clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResolution {
    pub value: f64,
    pub snapped: bool,
    pub in_zone: bool,
    pub force: f64,
    /// Selected candidate and its distance from the raw coordinate.
    pub target: Option<(SnapCandidate, f64)>,
}

/// Nearest in-zone candidate on `axis`, with its distance.
#[must_use]
pub fn select_candidate(
    raw: f64,
    axis: Axis,
    candidates: &[SnapCandidate],
    radius: f64,
) -> Option<(SnapCandidate, f64)> {
    let mut best: Option<(SnapCandidate, f64)> = None;
    for candidate in candidates.iter().filter(|c| c.axis == axis) {
        let distance = (raw - candidate.value).abs();
        if distance.is_nan() || distance > radius {
            continue;
        }
        match best {
            Some((current, current_distance))
                if !outranks(candidate, distance, &current, current_distance) => {}
            _ => best = Some((*candidate, distance)),
        }
    }
    best
}

fn outranks(
    candidate: &SnapCandidate,
    distance: f64,
    current: &SnapCandidate,
    current_distance: f64,
) -> bool {
    if distance != current_distance {
        return distance < current_distance;
    }
    let (p, q) = (candidate.kind.priority(), current.kind.priority());
    if p != q {
        return p > q;
    }
    candidate.strength > current.strength
}

/// Interpolation factor for a candidate `distance` away from the raw coordinate.
#[must_use]
pub fn effective_strength(candidate: &SnapCandidate, distance: f64, tuning: &SnapTuning) -> f64 {
    let pull = 1.0 - distance / tuning.snap_zone_radius;
    (tuning.base_strength * candidate.kind.magnetic_multiplier() * pull).clamp(0.0, 1.0)
}

/// Resolve one axis against the candidate set.
#[must_use]
pub fn resolve_axis(
    raw: f64,
    axis: Axis,
    candidates: &[SnapCandidate],
    tuning: &SnapTuning,
) -> AxisResolution {
    let Some((candidate, distance)) =
        select_candidate(raw, axis, candidates, tuning.snap_zone_radius)
    else {
        return AxisResolution {
            value: raw,
            snapped: false,
            in_zone: false,
            force: 0.0,
            target: None,
        };
    };

    let strength = effective_strength(&candidate, distance, tuning);
    let force = (candidate.value - raw) * strength;
    let snapped = distance <= tuning.full_snap_distance;
    let value = if snapped {
        candidate.value
    } else {
        lerp(raw, candidate.value, strength)
    };

    magsnap_core::trace!(
        axis = axis.as_str(),
        raw,
        target = candidate.value,
        kind = candidate.kind.as_str(),
        distance,
        strength,
        snapped,
        "magnetic pull"
    );

    AxisResolution {
        value,
        snapped,
        in_zone: true,
        force,
        target: Some((candidate, distance)),
    }
}

/// Turn a pointer-derived raw origin into a magnetically resolved one.
#[must_use]
pub fn resolve_position(
    raw: Point,
    candidates: &[SnapCandidate],
    dragged: &DraggedElement,
    canvas: &CanvasBounds,
    tuning: &SnapTuning,
) -> ResolvedPosition {
    if !dragged.rect.is_valid() || !raw.is_finite() || !canvas.is_valid() {
        magsnap_core::debug!(
            id = dragged.id.get(),
            "degenerate snap input; passing raw position through"
        );
        return ResolvedPosition::unsnapped(raw);
    }

    let x = resolve_axis(raw.x, Axis::X, candidates, tuning);
    let y = resolve_axis(raw.y, Axis::Y, candidates, tuning);

    let origin = canvas.clamp_origin(Point::new(x.value, y.value), &dragged.rect);
    ResolvedPosition {
        x: origin.x,
        y: origin.y,
        snapped_x: x.snapped,
        snapped_y: y.snapped,
        in_snap_zone: x.in_zone || y.in_zone,
        force: MagneticForce {
            x: x.force,
            y: y.force,
        },
    }
}

/// Result of the composed generate-then-resolve entry point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapOutcome {
    pub x: f64,
    pub y: f64,
    pub is_snapped: bool,
    /// Informational magnetic force magnitude; `0` outside every snap zone.
    pub snap_strength: f64,
}

impl From<ResolvedPosition> for SnapOutcome {
    fn from(resolved: ResolvedPosition) -> Self {
        Self {
            x: resolved.x,
            y: resolved.y,
            is_snapped: resolved.in_snap_zone,
            snap_strength: if resolved.in_snap_zone {
                resolved.force.magnitude()
            } else {
                0.0
            },
        }
    }
}

/// Generate candidates for the current layout and resolve `raw` against them.
#[must_use]
pub fn snap_to_guides(
    raw: Point,
    dragged: &DraggedElement,
    siblings: &[SiblingElement],
    canvas: &CanvasBounds,
    tuning: &SnapTuning,
) -> SnapOutcome {
    let candidates = generate_candidates(dragged, siblings, canvas, tuning);
    resolve_position(raw, &candidates, dragged, canvas, tuning).into()
}
