#![forbid(unsafe_code)]

//! Magnetic snapping and alignment guides for slide canvases.
//!
//! # Pipeline
//!
//! On every pointer move while an element is dragged:
//!
//! 1. [`generate_candidates`] enumerates alignment targets from the canvas
//!    (center, margins) and the sibling layout (edges, centers, spacing).
//! 2. [`resolve_position`] picks at most one candidate per axis and blends the
//!    raw position toward it, locking exactly when very close.
//! 3. The host applies the resolved origin.
//! 4. [`visible_guides`] and [`distance_badges`] describe what to draw.
//!
//! [`DragSession`] runs the whole loop for a gesture; [`snap_to_guides`] is the
//! single-call form of steps 1 and 2.
//!
//! Every function is a pure function of its arguments. Tunable constants live
//! in [`SnapTuning`].

pub mod candidates;
pub mod drag;
pub mod guides;
pub mod resolver;
pub mod tuning;
pub mod zones;

pub use candidates::{Anchor, GuideKind, SnapCandidate, generate_candidates};
pub use drag::{DragFrame, DragOutcome, DragSession};
pub use guides::{
    DistanceBadge, Guide, GuideOverlay, distance_badges, guide_overlay, visible_guides,
};
pub use magsnap_core::{
    Axis, CanvasBounds, DraggedElement, Element, ElementId, Point, Rect, SiblingElement,
};
pub use resolver::{
    AxisResolution, MagneticForce, ResolvedPosition, SnapOutcome, resolve_axis, resolve_position,
    select_candidate, snap_to_guides,
};
pub use tuning::{SnapTuning, SnapTuningError};
pub use zones::{SnapZoneActivity, active_snap_zones, velocity_reduction};
