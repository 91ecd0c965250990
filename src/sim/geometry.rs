//! Axis-aligned bounding boxes and play field bounds
//!
//! All coordinates are integer pixels with the origin at the top-left corner
//! of the field; `y` grows downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Rectangle of `size` anchored at the origin
    pub fn with_size(size: IVec2) -> Self {
        Self {
            pos: IVec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Center point (rounded toward the anchor for odd sizes)
    #[inline]
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// Move the rectangle so its center lands on `center`
    pub fn set_center(&mut self, center: IVec2) {
        self.pos = center - self.size / 2;
    }

    /// Shift the rectangle by `delta`
    pub fn translate(&mut self, delta: IVec2) {
        self.pos += delta;
    }

    /// True if the two rectangles share interior area (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Fixed play field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Field {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Left or right edge of `rect` is at or beyond the field boundary
    #[inline]
    pub fn touches_side(&self, rect: &Rect) -> bool {
        rect.left() <= 0 || rect.right() >= self.width
    }

    /// Top or bottom edge of `rect` is at or beyond the field boundary
    #[inline]
    pub fn touches_top_or_bottom(&self, rect: &Rect) -> bool {
        rect.top() <= 0 || rect.bottom() >= self.height
    }

    /// Any edge of `rect` is at or beyond the field boundary
    pub fn touches_border(&self, rect: &Rect) -> bool {
        self.touches_side(rect) || self.touches_top_or_bottom(rect)
    }

    /// `rect` lies fully inside the field (edges may sit on the boundary)
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.left() >= 0 && rect.top() >= 0 && rect.right() <= self.width && rect.bottom() <= self.height
    }

    /// True if an entity of `size` can be spawned without straddling the border
    pub fn fits(&self, size: IVec2) -> bool {
        self.width > size.x && self.height > size.y
    }
}
