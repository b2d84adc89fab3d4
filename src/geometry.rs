//! Value types for surface-space geometry.
//!
//! All coordinates are surface pixels with the origin at the top-left corner
//! and y growing downwards. There is no camera: one CSS pixel of the canvas
//! layout box maps to one pixel of the backing buffer.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Pixel dimensions of a surface or image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Largest uniform scale at which `self` fits entirely inside `bounds`.
    ///
    /// Returns `None` when either dimension of `self` is zero, since no finite
    /// scale exists.
    #[must_use]
    pub fn contain_scale(self, bounds: Size) -> Option<f64> {
        if self.width == 0.0 || self.height == 0.0 {
            return None;
        }
        Some((bounds.width / self.width).min(bounds.height / self.height))
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Closed containment test: points on the edges count as inside.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.x <= pt.x && self.y <= pt.y && self.right() >= pt.x && self.bottom() >= pt.y
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..self }
    }

    /// Grow by `by` pixels on every side.
    #[must_use]
    pub fn inflated(self, by: f64) -> Self {
        Self {
            x: self.x - by,
            y: self.y - by,
            w: self.w + by * 2.0,
            h: self.h + by * 2.0,
        }
    }

    /// Multiply the x axis (`x`, `w`) by `sx` and the y axis (`y`, `h`) by `sy`.
    #[must_use]
    pub fn scaled(self, sx: f64, sy: f64) -> Self {
        Self {
            x: self.x * sx,
            y: self.y * sy,
            w: self.w * sx,
            h: self.h * sy,
        }
    }

    /// Shift the rect so it lies inside `[0, bounds.width] x [0, bounds.height]`.
    ///
    /// Only the position changes. When the rect is larger than the bounds on an
    /// axis it is pinned to `0` on that axis and overflows the far edge.
    #[must_use]
    pub fn clamped_within(self, bounds: Size) -> Self {
        Self {
            x: self.x.min(bounds.width - self.w).max(0.0),
            y: self.y.min(bounds.height - self.h).max(0.0),
            ..self
        }
    }
}
