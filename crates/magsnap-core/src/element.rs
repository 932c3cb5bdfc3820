//! Slide elements as seen by the snapping engine.
//!
//! The engine only needs an element's identity and its bounding box; content,
//! styling and z-order belong to the hosting editor.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Opaque element identity, unique within one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A positioned element on the slide canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub rect: Rect,
}

impl Element {
    #[must_use]
    pub const fn new(id: ElementId, rect: Rect) -> Self {
        Self { id, rect }
    }
}

/// The element under the pointer. Its size is fixed for the whole drag.
pub type DraggedElement = Element;

/// Any other element on the same slide.
pub type SiblingElement = Element;
