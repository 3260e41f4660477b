//! BoxLayout - children in a row or a column.
//!
//! A `Layout` plus a `Direction`. The direction picks the main axis
//! (horizontal or vertical) and the order children are placed in.
//! `hbox()` and `vbox()` are the usual entry points.
//!
//! A box is a `LayoutItem` too, so boxes nest: the parent sizes a nested box
//! from its aggregated hint, and assigning it a rectangle runs its own pass.

use std::any::Any;

use crate::error::LayoutStatus;
use crate::primitives::{Rect, Size};

use super::axis::{Axis, Direction};
use super::container::Layout;
use super::item::{LayoutHint, LayoutItem};
use super::margins::Margins;
use super::solver::{self, BoxFlow};

#[derive(Debug, Default)]
pub struct BoxLayout {
    base: Layout,
    direction: Direction,
    name: Option<String>,
}

impl BoxLayout {
    pub fn new(direction: Direction) -> Self {
        Self {
            base: Layout::new(),
            direction,
            name: None,
        }
    }

    /// A left-to-right box.
    pub fn hbox() -> Self {
        Self::new(Direction::LeftToRight)
    }

    /// A top-to-bottom box.
    pub fn vbox() -> Self {
        Self::new(Direction::TopToBottom)
    }

    /// A box with uniform content margin and spacing.
    pub fn with_margin_spacing(direction: Direction, margin: i32, spacing: i32) -> Self {
        let mut layout = Self::new(direction);
        layout.base.set_spacing(spacing);
        layout.base.set_content_margins(Margins::all(margin));
        layout
    }

    // =====================================================================
    // Builder helpers
    // =====================================================================

    /// Append a child.
    pub fn push(mut self, child: impl LayoutItem + 'static) -> Self {
        self.base.add(Box::new(child));
        self
    }

    pub fn spacing(mut self, spacing: i32) -> Self {
        self.base.set_spacing(spacing);
        self
    }

    pub fn content_margins(mut self, margins: Margins) -> Self {
        self.base.set_content_margins(margins);
        self
    }

    /// Outer margins, used when this box is nested.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.base.set_margins(margins);
        self
    }

    /// Flex weight, used when this box is nested.
    pub fn with_flex(mut self, flex: f32) -> Self {
        self.base.set_flex(flex);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.set_direction(direction);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // =====================================================================
    // Accessors
    // =====================================================================

    pub fn layout(&self) -> &Layout {
        &self.base
    }

    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.base
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.base.invalidate();
        self.direction = direction;
    }

    pub fn is_forward(&self) -> bool {
        self.direction.is_forward()
    }

    /// The axis this box can grow along. Cross-axis growth is not advertised.
    pub fn expanding_directions(&self) -> Axis {
        self.direction.axis()
    }

    fn flow(&self) -> BoxFlow {
        BoxFlow {
            axis: self.direction.axis(),
            forward: self.direction.is_forward(),
            spacing: self.base.spacing(),
            content_margins: self.base.content_margins(),
        }
    }

    // =====================================================================
    // Layout
    // =====================================================================

    /// Aggregate the children into this box's minimum, hint and maximum.
    ///
    /// Memoized until the box or one of its children is mutated.
    pub fn calculate_layout_hint(&self) -> LayoutHint {
        self.base
            .cached_hint(|| solver::aggregate_hint(self.base.items(), &self.flow()))
    }

    /// Place every child inside `rect`.
    pub fn do_layout(&mut self, rect: Rect) -> LayoutStatus {
        let flow = self.flow();
        tracing::trace!(
            name = self.name.as_deref(),
            ?rect,
            children = self.base.len(),
            "box layout pass"
        );
        solver::place(self.base.items_for_placement(), &flow, rect)
    }
}

impl LayoutItem for BoxLayout {
    fn size_hint(&self) -> Size {
        self.calculate_layout_hint().hint
    }

    fn minimum_size(&self) -> Size {
        self.calculate_layout_hint().minimum
    }

    fn maximum_size(&self) -> Size {
        self.calculate_layout_hint().maximum
    }

    fn margins(&self) -> Margins {
        self.base.margins()
    }

    fn flex(&self) -> f32 {
        self.base.flex()
    }

    fn set_layout_geometry(&mut self, rect: Rect) {
        self.base.set_layout_geometry(rect);
        self.do_layout(rect);
    }

    fn geometry(&self) -> Rect {
        self.base.geometry()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn children(&self) -> &[Box<dyn LayoutItem>] {
        self.base.items()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// =========================================================================
// Tests
// =========================================================================
