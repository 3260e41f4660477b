//! Core geometry types for Trellis.
//!
//! Layout works in whole pixels, so every component is an `i32`.

use serde::{Deserialize, Serialize};

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    /// No upper bound on either axis.
    pub const UNBOUNDED: Self = Self {
        width: i32::MAX,
        height: i32::MAX,
    };

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if `self` fits inside `other` on both axes.
    #[inline]
    pub fn fits_in(&self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle in the coordinate space of its parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle is valid when it covers a non-empty area.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_validity() {
        assert!(Rect::new(0, 0, 10, 10).is_valid());
        assert!(!Rect::new(0, 0, 0, 10).is_valid());
        assert!(!Rect::new(5, 5, 10, -1).is_valid());
        assert!(!Rect::ZERO.is_valid());
    }

    #[test]
    fn test_rect_size() {
        assert_eq!(Rect::new(10, 20, 30, 40).size(), Size::new(30, 40));
    }

    #[test]
    fn test_size_fits_in() {
        assert!(Size::new(10, 10).fits_in(Size::UNBOUNDED));
        assert!(!Size::new(11, 10).fits_in(Size::new(10, 10)));
    }
}
