#![forbid(unsafe_code)]

//! Core: geometry and element identity for slide-canvas snapping.
//!
//! # Role in magsnap
//! `magsnap-core` is the vocabulary layer. It owns the floating-point
//! rectangle and point types, the canvas bounds, and the element identity
//! shared by the dragged element and its siblings.
//!
//! # How it fits in the system
//! `magsnap-snap` builds candidate alignment lines and resolves magnetic
//! positions on top of these types. Nothing in this crate holds state across
//! pointer moves; every value is recomputed by the caller on each event.

pub mod element;
pub mod geometry;
pub mod logging;

pub use element::{DraggedElement, Element, ElementId, SiblingElement};
pub use geometry::{Axis, CanvasBounds, Point, Rect, clamp_span, lerp};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
