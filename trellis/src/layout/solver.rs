//! Box layout solver.
//!
//! Hint aggregation and placement for a sequence of items along one axis.
//! Both horizontal and vertical boxes run this exact code with a different
//! `Axis`; nothing here knows about x/y or width/height directly.

use crate::error::LayoutStatus;
use crate::primitives::{Rect, Size};

use super::axis::Axis;
use super::collapse::{collapse_gap, collapse_margins, inter_item_gaps};
use super::flex::{FlexScratch, distribute_flex};
use super::item::{LayoutHint, LayoutItem};
use super::margins::Margins;

/// The container-level parameters of one box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxFlow {
    pub axis: Axis,
    /// Place children first-to-last when true, last-to-first otherwise.
    pub forward: bool,
    pub spacing: i32,
    pub content_margins: Margins,
}

impl BoxFlow {
    /// Main-axis space taken by margins and gaps: the container's leading
    /// and trailing margins plus every collapsed gap between neighbours.
    pub fn main_axis_gaps(&self, items: &[Box<dyn LayoutItem>]) -> i64 {
        i64::from(self.axis.leading_main(&self.content_margins))
            + inter_item_gaps(items, self.axis, self.spacing)
            + i64::from(self.axis.trailing_main(&self.content_margins))
    }

    fn cross_margins(&self) -> i64 {
        i64::from(self.axis.leading_cross(&self.content_margins))
            + i64::from(self.axis.trailing_cross(&self.content_margins))
    }
}

/// Clamp a wide sum back into pixel range. Anything past `i32::MAX` is as
/// good as unbounded.
#[inline]
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Fold the children into the container's own minimum, hint and maximum.
///
/// Inflexible children count at their hint towards the minimum since they
/// never shrink. The maximum is always unbounded.
pub fn aggregate_hint(items: &[Box<dyn LayoutItem>], flow: &BoxFlow) -> LayoutHint {
    let axis = flow.axis;

    let mut main_hint: i64 = 0;
    let mut main_min: i64 = 0;
    let mut cross_hint: i64 = 0;
    let mut cross_min: i64 = 0;

    for child in items {
        let hint = child.size_hint();
        let min = child.minimum_size();
        let margins = child.margins();

        main_hint += i64::from(axis.main(hint));
        main_min += i64::from(if child.has_flex() { axis.main(min) } else { axis.main(hint) });

        let cross_margin =
            i64::from(axis.leading_cross(&margins)) + i64::from(axis.trailing_cross(&margins));
        cross_hint = cross_hint.max(i64::from(axis.cross(hint)) + cross_margin);
        cross_min = cross_min.max(i64::from(axis.cross(min)) + cross_margin);
    }

    let gaps = flow.main_axis_gaps(items);
    let cross_extra = flow.cross_margins();

    LayoutHint {
        minimum: axis.pack_size(saturate(main_min + gaps), saturate(cross_min + cross_extra)),
        hint: axis.pack_size(saturate(main_hint + gaps), saturate(cross_hint + cross_extra)),
        maximum: Size::UNBOUNDED,
    }
}

/// Compute and assign a rectangle to every child.
///
/// `rect` is the container's own rectangle; child geometry is expressed in
/// the container's local space. An invalid rectangle leaves every child
/// untouched and reports `LayoutStatus::Skipped`.
pub fn place(items: &mut [Box<dyn LayoutItem>], flow: &BoxFlow, rect: Rect) -> LayoutStatus {
    if !rect.is_valid() {
        tracing::debug!(?rect, "skipping layout pass for invalid rectangle");
        return LayoutStatus::Skipped;
    }

    let axis = flow.axis;
    let available_main = axis.main(rect.size());
    let available_cross = axis.cross(rect.size());

    // Scratch records live for this pass only, indexed like `items`.
    let mut scratch: Vec<FlexScratch> = items
        .iter()
        .map(|child| {
            let hint = axis.main(child.size_hint());
            if child.has_flex() {
                FlexScratch::new(
                    axis.main(child.minimum_size()),
                    axis.main(child.maximum_size()),
                    hint,
                    child.flex(),
                )
            } else {
                FlexScratch::inflexible(hint)
            }
        })
        .collect();

    if scratch.iter().any(FlexScratch::is_flexible) {
        let allocated =
            flow.main_axis_gaps(items) + scratch.iter().map(|s| i64::from(s.hint)).sum::<i64>();
        if allocated != i64::from(available_main) {
            distribute_flex(&mut scratch, available_main, allocated);
        }
    }

    let order: Vec<usize> = if flow.forward {
        (0..items.len()).collect()
    } else {
        (0..items.len()).rev().collect()
    };

    let mut position = 0;
    let mut prev_trailing: Option<i32> = None;

    for index in order {
        let child = &mut items[index];
        let margins = child.margins();
        let leading = axis.leading_main(&margins);

        position = match prev_trailing {
            // The first child placed collapses against the container edge,
            // whichever end of the sequence it comes from.
            None => collapse_margins(axis.leading_main(&flow.content_margins), leading),
            Some(trailing) => {
                position.saturating_add(collapse_gap(flow.spacing, trailing, leading))
            }
        };

        let main_size = scratch[index].size();

        let cross_leading = axis.leading_cross(&margins);
        let cross_trailing = axis.trailing_cross(&margins);
        // Container cross margins are counted in the hint only; children
        // start at their own leading cross margin.
        let cross_size = available_cross
            .saturating_sub(cross_leading)
            .saturating_sub(cross_trailing)
            .min(axis.cross(child.maximum_size()))
            .max(axis.cross(child.minimum_size()));

        let geometry = axis.pack_rect(position, cross_leading, main_size, cross_size);
        tracing::trace!(index, ?geometry, name = child.name(), "placing child");
        child.set_layout_geometry(geometry);

        position = position.saturating_add(main_size);
        prev_trailing = Some(axis.trailing_main(&margins));
    }

    LayoutStatus::Placed
}

// =========================================================================
// Tests
// =========================================================================
