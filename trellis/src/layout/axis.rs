//! Axis selection and iteration direction.
//!
//! The solver only ever talks in (main, cross) terms. `Axis` is the single
//! place that maps those back to x/width and y/height, so horizontal and
//! vertical boxes cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::primitives::{Rect, Size};

use super::margins::Margins;

/// The main axis of a box container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Children flow along x; width is the main extent.
    Horizontal,
    /// Children flow along y; height is the main extent.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn cross_axis(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn main(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    #[inline]
    pub fn cross(self, size: Size) -> i32 {
        self.cross_axis().main(size)
    }

    /// Left for horizontal, top for vertical.
    #[inline]
    pub fn leading_main(self, margins: &Margins) -> i32 {
        match self {
            Axis::Horizontal => margins.left,
            Axis::Vertical => margins.top,
        }
    }

    /// Right for horizontal, bottom for vertical.
    #[inline]
    pub fn trailing_main(self, margins: &Margins) -> i32 {
        match self {
            Axis::Horizontal => margins.right,
            Axis::Vertical => margins.bottom,
        }
    }

    #[inline]
    pub fn leading_cross(self, margins: &Margins) -> i32 {
        self.cross_axis().leading_main(margins)
    }

    #[inline]
    pub fn trailing_cross(self, margins: &Margins) -> i32 {
        self.cross_axis().trailing_main(margins)
    }

    /// Build a size from main/cross extents.
    #[inline]
    pub fn pack_size(self, main: i32, cross: i32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Build a rectangle from main/cross position and extents.
    #[inline]
    pub fn pack_rect(self, main_pos: i32, cross_pos: i32, main_size: i32, cross_size: i32) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(main_pos, cross_pos, main_size, cross_size),
            Axis::Vertical => Rect::new(cross_pos, main_pos, cross_size, main_size),
        }
    }
}

/// Flow direction of a box container: its axis plus iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::LeftToRight | Direction::RightToLeft => Axis::Horizontal,
            Direction::TopToBottom | Direction::BottomToTop => Axis::Vertical,
        }
    }

    /// Whether children are placed first-to-last.
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::LeftToRight | Direction::TopToBottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_size_mapping() {
        let size = Size::new(30, 70);
        assert_eq!(Axis::Horizontal.main(size), 30);
        assert_eq!(Axis::Horizontal.cross(size), 70);
        assert_eq!(Axis::Vertical.main(size), 70);
        assert_eq!(Axis::Vertical.cross(size), 30);
    }

    #[test]
    fn test_axis_margin_mapping() {
        let m = Margins::new(1, 2, 3, 4);
        assert_eq!(Axis::Horizontal.leading_main(&m), 4);
        assert_eq!(Axis::Horizontal.trailing_main(&m), 2);
        assert_eq!(Axis::Horizontal.leading_cross(&m), 1);
        assert_eq!(Axis::Horizontal.trailing_cross(&m), 3);
        assert_eq!(Axis::Vertical.leading_main(&m), 1);
        assert_eq!(Axis::Vertical.trailing_main(&m), 3);
        assert_eq!(Axis::Vertical.leading_cross(&m), 4);
        assert_eq!(Axis::Vertical.trailing_cross(&m), 2);
    }

    #[test]
    fn test_pack_rect() {
        assert_eq!(Axis::Horizontal.pack_rect(10, 2, 30, 40), Rect::new(10, 2, 30, 40));
        assert_eq!(Axis::Vertical.pack_rect(10, 2, 30, 40), Rect::new(2, 10, 40, 30));
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::default(), Direction::LeftToRight);
        assert!(Direction::LeftToRight.is_forward());
        assert!(!Direction::RightToLeft.is_forward());
        assert!(Direction::TopToBottom.is_forward());
        assert!(!Direction::BottomToTop.is_forward());
        assert_eq!(Direction::BottomToTop.axis(), Axis::Vertical);
        assert_eq!(Direction::RightToLeft.axis(), Axis::Horizontal);
    }
}
