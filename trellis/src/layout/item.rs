//! Layout items - the capability surface a container works against.
//!
//! Containers never know the concrete type of their children. They query
//! sizes, margins and flex through `LayoutItem` and hand back a rectangle via
//! `set_layout_geometry`. A container is itself a `LayoutItem`, which is how
//! a geometry change recurses down the tree.

use std::any::Any;
use std::fmt;

use crate::primitives::{Rect, Size};

use super::margins::Margins;

/// Aggregated sizing information for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutHint {
    pub minimum: Size,
    pub hint: Size,
    pub maximum: Size,
}

/// Anything a container can place.
///
/// Implementations are expected to keep `minimum_size <= size_hint <=
/// maximum_size` on both axes. The solver relies on it and does not check.
pub trait LayoutItem: fmt::Debug {
    /// Preferred size.
    fn size_hint(&self) -> Size;

    fn minimum_size(&self) -> Size;

    fn maximum_size(&self) -> Size;

    /// Outer margins, collapsed against neighbours and container margins.
    fn margins(&self) -> Margins;

    /// Flex weight. Zero means the item is always sized at its hint.
    fn flex(&self) -> f32;

    #[inline]
    fn has_flex(&self) -> bool {
        self.flex() > 0.0
    }

    /// Assign the final rectangle. Containers run their own placement here.
    fn set_layout_geometry(&mut self, rect: Rect);

    /// Last rectangle assigned by the parent.
    fn geometry(&self) -> Rect;

    /// Optional label, used by snapshots and log output.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Owned children. Leaves have none.
    fn children(&self) -> &[Box<dyn LayoutItem>] {
        &[]
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// =========================================================================
// Widget
// =========================================================================

/// A leaf item with fixed sizing properties.
///
/// Stands in for whatever a windowing layer puts in a layout: the solver
/// only needs its sizes, margins and flex weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    name: Option<String>,
    size_hint: Size,
    minimum_size: Size,
    maximum_size: Size,
    margins: Margins,
    flex: f32,
    geometry: Rect,
}

impl Widget {
    /// A widget preferring `hint`, free to shrink to zero or grow unbounded.
    pub fn new(hint: impl Into<Size>) -> Self {
        Self {
            name: None,
            size_hint: hint.into(),
            minimum_size: Size::ZERO,
            maximum_size: Size::UNBOUNDED,
            margins: Margins::ZERO,
            flex: 0.0,
            geometry: Rect::ZERO,
        }
    }

    /// A widget whose minimum, hint and maximum are all `size`.
    pub fn fixed(size: impl Into<Size>) -> Self {
        let size = size.into();
        Self {
            minimum_size: size,
            maximum_size: size,
            ..Self::new(size)
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn minimum(mut self, size: impl Into<Size>) -> Self {
        self.minimum_size = size.into();
        self
    }

    pub fn maximum(mut self, size: impl Into<Size>) -> Self {
        self.maximum_size = size.into();
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_flex(mut self, flex: f32) -> Self {
        self.flex = flex;
        self
    }

    pub fn set_size_hint(&mut self, hint: Size) {
        self.size_hint = hint;
    }

    pub fn set_flex(&mut self, flex: f32) {
        self.flex = flex;
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }
}

impl LayoutItem for Widget {
    fn size_hint(&self) -> Size {
        self.size_hint
    }

    fn minimum_size(&self) -> Size {
        self.minimum_size
    }

    fn maximum_size(&self) -> Size {
        self.maximum_size
    }

    fn margins(&self) -> Margins {
        self.margins
    }

    fn flex(&self) -> f32 {
        self.flex
    }

    fn set_layout_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }

    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_defaults() {
        let w = Widget::new((20, 50));
        assert_eq!(w.size_hint(), Size::new(20, 50));
        assert_eq!(w.minimum_size(), Size::ZERO);
        assert_eq!(w.maximum_size(), Size::UNBOUNDED);
        assert_eq!(w.margins(), Margins::ZERO);
        assert!(!w.has_flex());
        assert_eq!(w.geometry(), Rect::ZERO);
        assert!(w.children().is_empty());
    }

    #[test]
    fn test_widget_fixed() {
        let w = Widget::fixed((10, 10));
        assert_eq!(w.minimum_size(), Size::new(10, 10));
        assert_eq!(w.maximum_size(), Size::new(10, 10));
    }

    #[test]
    fn test_widget_builder_pattern() {
        let w = Widget::new((20, 50))
            .named("label")
            .minimum((5, 5))
            .maximum((100, 60))
            .with_margins(Margins::all(2))
            .with_flex(2.0);

        assert_eq!(w.name(), Some("label"));
        assert_eq!(w.minimum_size(), Size::new(5, 5));
        assert_eq!(w.maximum_size(), Size::new(100, 60));
        assert_eq!(w.margins(), Margins::all(2));
        assert!(w.has_flex());
        assert_eq!(w.flex(), 2.0);
    }

    #[test]
    fn test_widget_geometry() {
        let mut w = Widget::new((20, 50));
        w.set_layout_geometry(Rect::new(1, 2, 3, 4));
        assert_eq!(w.geometry(), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn test_downcast() {
        let mut item: Box<dyn LayoutItem> = Box::new(Widget::new((1, 1)));
        let widget = item.as_any_mut().downcast_mut::<Widget>();
        assert!(widget.is_some());
    }
}
