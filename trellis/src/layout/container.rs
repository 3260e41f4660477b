//! Layout - an owned, ordered sequence of items.
//!
//! Holds the state every container shares: children, spacing, content
//! margins and the last assigned rectangle. Sequence order is the visual
//! order and the basis for margin collapsing.
//!
//! Children are owned by value. `take_at` hands ownership back to the
//! caller; anything still in the sequence is dropped with the layout.

use std::any::Any;
use std::cell::Cell;

use crate::primitives::Rect;

use super::item::{LayoutHint, LayoutItem};
use super::margins::Margins;

#[derive(Debug, Default)]
pub struct Layout {
    items: Vec<Box<dyn LayoutItem>>,
    spacing: i32,
    /// Margins between the container edge and its children.
    content_margins: Margins,
    /// Margins of the container itself when nested in another layout.
    margins: Margins,
    flex: f32,
    geometry: Rect,
    /// Memoized hint, cleared by every mutation of this layout.
    cached_hint: Cell<Option<LayoutHint>>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, taking ownership.
    pub fn add(&mut self, item: Box<dyn LayoutItem>) {
        self.invalidate();
        self.items.push(item);
    }

    /// Insert an item at `index`, clamped to the end of the sequence.
    pub fn insert(&mut self, index: usize, item: Box<dyn LayoutItem>) {
        self.invalidate();
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Remove the item at `index` and return it to the caller.
    pub fn take_at(&mut self, index: usize) -> Option<Box<dyn LayoutItem>> {
        if index >= self.items.len() {
            return None;
        }
        self.invalidate();
        Some(self.items.remove(index))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_at(&self, index: usize) -> Option<&dyn LayoutItem> {
        self.items.get(index).map(|item| &**item)
    }

    /// Mutable access to an item. Assumes the item's hints may change.
    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut (dyn LayoutItem + 'static)> {
        self.invalidate();
        self.items.get_mut(index).map(|item| &mut **item)
    }

    /// Typed mutable access to an item.
    pub fn downcast_mut<T: Any>(&mut self, index: usize) -> Option<&mut T> {
        self.get_at_mut(index)
            .and_then(|item| item.as_any_mut().downcast_mut::<T>())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn LayoutItem> {
        self.items.iter().map(|item| &**item)
    }

    pub fn items(&self) -> &[Box<dyn LayoutItem>] {
        &self.items
    }

    /// Mutable view of the items for a placement pass.
    ///
    /// Placement only assigns geometry, so the hint cache is kept.
    pub(crate) fn items_for_placement(&mut self) -> &mut [Box<dyn LayoutItem>] {
        &mut self.items
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: i32) {
        self.invalidate();
        self.spacing = spacing;
    }

    pub fn content_margins(&self) -> Margins {
        self.content_margins
    }

    pub fn set_content_margins(&mut self, margins: Margins) {
        self.invalidate();
        self.content_margins = margins;
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    pub fn flex(&self) -> f32 {
        self.flex
    }

    pub fn set_flex(&mut self, flex: f32) {
        self.flex = flex;
    }

    /// Whether any child takes part in flex distribution.
    pub fn has_flex_items(&self) -> bool {
        self.items.iter().any(|item| item.has_flex())
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Store the container's rectangle. Subtypes run placement afterwards.
    pub fn set_layout_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }

    /// Return the cached hint or compute and remember it.
    pub(crate) fn cached_hint(&self, compute: impl FnOnce() -> LayoutHint) -> LayoutHint {
        if let Some(hint) = self.cached_hint.get() {
            return hint;
        }
        let hint = compute();
        self.cached_hint.set(Some(hint));
        hint
    }

    /// Drop the cached hint so the next query recomputes it.
    pub fn invalidate(&mut self) {
        self.cached_hint.set(None);
    }

    pub fn has_cached_hint(&self) -> bool {
        self.cached_hint.get().is_some()
    }
}
