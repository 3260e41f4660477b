//! Margin collapsing.
//!
//! Adjoining margins do not stack: where two margins (or a margin and the
//! container spacing) touch, the larger one wins.

use super::axis::Axis;
use super::item::LayoutItem;

/// Collapse two adjoining margins.
#[inline]
pub fn collapse_margins(a: i32, b: i32) -> i32 {
    a.max(b)
}

/// Gap between two consecutive children.
///
/// Spacing can be raised by a larger margin but never reduced by one.
#[inline]
pub fn collapse_gap(spacing: i32, trailing_of_prev: i32, leading_of_next: i32) -> i32 {
    spacing.max(trailing_of_prev).max(leading_of_next)
}

/// Sum of the collapsed gaps between consecutive children along `axis`,
/// in sequence order. Summed in `i64` so long sequences cannot overflow.
pub fn inter_item_gaps(items: &[Box<dyn LayoutItem>], axis: Axis, spacing: i32) -> i64 {
    items
        .windows(2)
        .map(|pair| {
            i64::from(collapse_gap(
                spacing,
                axis.trailing_main(&pair[0].margins()),
                axis.leading_main(&pair[1].margins()),
            ))
        })
        .sum()
}
