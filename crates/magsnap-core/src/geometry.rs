#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are canvas-space pixels with the origin at the top-left
//! corner of the slide. Values are `f64` because drag positions are derived
//! from zoomed pointer coordinates and are routinely fractional.

use serde::{Deserialize, Serialize};

/// One of the two canvas axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Horizontal position (columns, vertical guide lines).
    X,
    /// Vertical position (rows, horizontal guide lines).
    Y,
}

impl Axis {
    /// Both axes in resolution order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// A canvas-space point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`.
    #[inline]
    #[must_use]
    pub const fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy of this point with the coordinate along `axis` replaced.
    #[inline]
    #[must_use]
    pub const fn with(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Self::new(value, self.y),
            Axis::Y => Self::new(self.x, value),
        }
    }

    /// Both coordinates are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned box positioned by its top-left corner.
///
/// A rectangle is only meaningful for snapping when [`Rect::is_valid`] holds:
/// every field finite and both dimensions strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Finite coordinates and strictly positive dimensions.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[inline]
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[inline]
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Top-left corner.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Leading edge along `axis` (left or top).
    #[inline]
    #[must_use]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Trailing edge along `axis` (right or bottom).
    #[inline]
    #[must_use]
    pub fn end(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis)
    }

    /// Size along `axis` (width or height).
    #[inline]
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Midpoint along `axis`.
    #[inline]
    #[must_use]
    pub fn center(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis) / 2.0
    }

    /// Same size, moved so its top-left corner sits at `origin`.
    #[inline]
    #[must_use]
    pub const fn with_origin(&self, origin: Point) -> Rect {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }
}

/// The editable slide area. The origin is always `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Finite and strictly positive in both dimensions.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Size along `axis`.
    #[inline]
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Canvas midpoint along `axis`.
    #[inline]
    #[must_use]
    pub fn center(&self, axis: Axis) -> f64 {
        self.extent(axis) / 2.0
    }

    /// Clamp a top-left position so a box of `size` stays on the canvas.
    ///
    /// When the box is larger than the canvas the origin is pinned to `0`.
    #[must_use]
    pub fn clamp_origin(&self, origin: Point, size: &Rect) -> Point {
        Point::new(
            clamp_span(origin.x, size.width, self.width),
            clamp_span(origin.y, size.height, self.height),
        )
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

/// Clamp a leading edge so a span of `extent` fits in `[0, limit]`.
///
/// The lower bound wins when the span does not fit.
#[inline]
#[must_use]
pub fn clamp_span(start: f64, extent: f64, limit: f64) -> f64 {
    start.min(limit - extent).max(0.0)
}

/// Linear interpolation from `start` toward `end`, with `factor` clamped to `[0, 1]`.
#[inline]
#[must_use]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}
