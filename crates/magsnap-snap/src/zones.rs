//! Snap-zone feedback for the host's pointer handling.
//!
//! These helpers look at every candidate, not just the one the resolver
//! selects, so the host can slow the pointer down or highlight the zone as
//! soon as any guide is within reach.

use magsnap_core::{Axis, Point};
use serde::{Deserialize, Serialize};

use crate::candidates::SnapCandidate;
use crate::tuning::SnapTuning;

/// Share of the base strength that further damps pointer velocity.
pub const STRENGTH_DAMPING: f64 = 0.2;

/// Per-axis snap-zone activity for visual feedback.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapZoneActivity {
    pub x: bool,
    pub y: bool,
    /// Strongest `(1 - distance / radius) * strength` among in-zone candidates.
    pub strength: f64,
}

fn in_zone<'a>(
    position: Point,
    candidates: &'a [SnapCandidate],
    radius: f64,
) -> impl Iterator<Item = (&'a SnapCandidate, f64)> + 'a {
    candidates.iter().filter_map(move |candidate| {
        let distance = (position.get(candidate.axis) - candidate.value).abs();
        (distance <= radius).then_some((candidate, distance))
    })
}

/// Pointer velocity multiplier: `1.0` outside every zone, lower inside.
#[must_use]
pub fn velocity_reduction(
    position: Point,
    candidates: &[SnapCandidate],
    tuning: &SnapTuning,
) -> f64 {
    let max_strength = in_zone(position, candidates, tuning.snap_zone_radius)
        .map(|(candidate, _)| candidate.strength)
        .reduce(f64::max);
    match max_strength {
        Some(strength) => tuning.velocity_reduction * (1.0 - strength * STRENGTH_DAMPING),
        None => 1.0,
    }
}

/// Which axes currently sit inside a snap zone, and how strongly.
#[must_use]
pub fn active_snap_zones(
    position: Point,
    candidates: &[SnapCandidate],
    tuning: &SnapTuning,
) -> SnapZoneActivity {
    let radius = tuning.snap_zone_radius;
    let mut activity = SnapZoneActivity::default();
    for (candidate, distance) in in_zone(position, candidates, radius) {
        match candidate.axis {
            Axis::X => activity.x = true,
            Axis::Y => activity.y = true,
        }
        let weighted = (1.0 - distance / radius) * candidate.strength;
        activity.strength = activity.strength.max(weighted);
    }
    activity
}
