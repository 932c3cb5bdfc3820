//! Snap tuning constants and validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default radius within which a candidate exerts magnetic pull.
pub const SNAP_ZONE_RADIUS: f64 = 12.0;

/// Default distance at or below which a candidate locks exactly.
pub const FULL_SNAP_DISTANCE: f64 = 2.0;

/// Default base magnetic strength before the guide-kind multiplier.
pub const BASE_MAGNETIC_STRENGTH: f64 = 0.6;

/// Default visual tolerance for drawing guide lines.
pub const GUIDE_TOLERANCE: f64 = 15.0;

/// Default lower bound on guide opacity.
pub const GUIDE_MIN_OPACITY: f64 = 0.4;

/// Default pointer speed factor applied inside a snap zone.
pub const VELOCITY_REDUCTION: f64 = 0.7;

/// Default maximum gap labelled by a distance badge.
pub const BADGE_MAX_DISTANCE: f64 = 100.0;

/// Default pointer travel before a press turns into a drag.
pub const DRAG_ACTIVATION_THRESHOLD: f64 = 3.0;

/// Default slide margins in pixels.
pub const DEFAULT_MARGINS: [f64; 3] = [20.0, 40.0, 60.0];

/// Default "nice" spacing increments in pixels.
pub const DEFAULT_SPACING_STEPS: [f64; 5] = [8.0, 16.0, 24.0, 32.0, 48.0];

/// Every tunable constant of the snapping pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapTuning {
    pub snap_zone_radius: f64,
    pub full_snap_distance: f64,
    pub base_strength: f64,
    pub margins: Vec<f64>,
    pub spacing_steps: Vec<f64>,
    /// Emit edge-to-opposite-edge candidates for adjacency snapping.
    pub adjacency_candidates: bool,
    pub guide_tolerance: f64,
    pub guide_min_opacity: f64,
    pub badge_max_distance: f64,
    pub velocity_reduction: f64,
    pub drag_activation_threshold: f64,
}

impl Default for SnapTuning {
    fn default() -> Self {
        Self {
            snap_zone_radius: SNAP_ZONE_RADIUS,
            full_snap_distance: FULL_SNAP_DISTANCE,
            base_strength: BASE_MAGNETIC_STRENGTH,
            margins: DEFAULT_MARGINS.to_vec(),
            spacing_steps: DEFAULT_SPACING_STEPS.to_vec(),
            adjacency_candidates: true,
            guide_tolerance: GUIDE_TOLERANCE,
            guide_min_opacity: GUIDE_MIN_OPACITY,
            badge_max_distance: BADGE_MAX_DISTANCE,
            velocity_reduction: VELOCITY_REDUCTION,
            drag_activation_threshold: DRAG_ACTIVATION_THRESHOLD,
        }
    }
}

impl SnapTuning {
    /// Check every field against its admissible range.
    pub fn validate(&self) -> Result<(), SnapTuningError> {
        positive("snap_zone_radius", self.snap_zone_radius)?;
        non_negative("full_snap_distance", self.full_snap_distance)?;
        if self.full_snap_distance > self.snap_zone_radius {
            return Err(SnapTuningError::LockOutsideZone {
                full_snap_distance: self.full_snap_distance,
                snap_zone_radius: self.snap_zone_radius,
            });
        }
        non_negative("base_strength", self.base_strength)?;
        for &margin in &self.margins {
            non_negative("margins", margin)?;
        }
        for &step in &self.spacing_steps {
            positive("spacing_steps", step)?;
        }
        positive("guide_tolerance", self.guide_tolerance)?;
        unit_interval("guide_min_opacity", self.guide_min_opacity)?;
        non_negative("badge_max_distance", self.badge_max_distance)?;
        unit_interval("velocity_reduction", self.velocity_reduction)?;
        non_negative("drag_activation_threshold", self.drag_activation_threshold)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SnapTuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SnapTuningError::OutOfRange {
            field,
            value,
            expected: "finite and > 0",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), SnapTuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SnapTuningError::OutOfRange {
            field,
            value,
            expected: "finite and >= 0",
        })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), SnapTuningError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SnapTuningError::OutOfRange {
            field,
            value,
            expected: "within [0, 1]",
        })
    }
}

/// Tuning validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapTuningError {
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    LockOutsideZone {
        full_snap_distance: f64,
        snap_zone_radius: f64,
    },
}

impl fmt::Display for SnapTuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "invalid {field} value {value} (must be {expected})"),
            Self::LockOutsideZone {
                full_snap_distance,
                snap_zone_radius,
            } => write!(
                f,
                "full_snap_distance {full_snap_distance} exceeds snap_zone_radius {snap_zone_radius}"
            ),
        }
    }
}

impl std::error::Error for SnapTuningError {}
