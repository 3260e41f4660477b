//! Trellis - directional box layout.
//!
//! Given a container rectangle and an ordered list of items (each with a
//! size hint, minimum, maximum, margins and flex weight), compute a rectangle
//! for every item along a main axis and a cross axis.
//!
//! # Example
//!
//! ```
//! use trellis::{BoxLayout, LayoutItem, Rect, Widget};
//!
//! let mut row = BoxLayout::hbox()
//!     .spacing(10)
//!     .push(Widget::new((20, 50)))
//!     .push(Widget::new((30, 50)).with_flex(1.0))
//!     .push(Widget::new((40, 50)));
//!
//! row.set_layout_geometry(Rect::new(0, 0, 200, 50));
//!
//! let middle = row.layout().get_at(1).map(|item| item.geometry());
//! assert_eq!(middle, Some(Rect::new(30, 0, 120, 50)));
//! ```
//!
//! Layout trees can also be described in JSON, see [`LayoutNode`].

pub mod description;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod snapshot;

pub use description::LayoutNode;
pub use error::{LayoutError, LayoutStatus};
pub use layout::{
    Axis, BoxLayout, Direction, Layout, LayoutHint, LayoutItem, Margins, Widget,
};
pub use primitives::{Rect, Size};
pub use snapshot::GeometrySnapshot;
