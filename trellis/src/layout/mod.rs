//! Layout System for Trellis
//!
//! Directional box layout: containers place an ordered sequence of items
//! along a main axis, sizing inflexible items at their hint and sharing any
//! slack or deficit between flexible ones.
//!
//! # Architecture
//!
//! ```text
//! set_layout_geometry(rect) -> do_layout(rect) -> flex offsets -> child rects
//!                                                        |
//!                                   nested boxes recurse via set_layout_geometry
//! ```
//!
//! Horizontal and vertical boxes share one solver parameterized by `Axis`.

pub mod axis;
pub mod box_layout;
pub mod collapse;
pub mod container;
pub mod flex;
pub mod item;
pub mod margins;
pub mod solver;

// Re-export core types
pub use axis::{Axis, Direction};
pub use box_layout::BoxLayout;
pub use collapse::{collapse_gap, collapse_margins};
pub use container::Layout;
pub use flex::{FlexScratch, distribute_flex};
pub use item::{LayoutHint, LayoutItem, Widget};
pub use margins::Margins;
pub use solver::BoxFlow;
