//! Viewport-space geometry for overlay placement.

use serde::{Deserialize, Serialize};

/// Bounding rectangle of an element in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementBounds {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBounds {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Bottom edge in viewport coordinates.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Right edge in viewport coordinates.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// True for a zero-area rect. Elements detached from the document
    /// snapshot as empty.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Host viewport dimensions, used to center the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
