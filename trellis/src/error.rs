//! Layout status and error types.

use thiserror::Error;

/// Outcome of a placement pass.
///
/// Placement cannot fail; `Skipped` only flags that the rectangle was
/// degenerate and no child geometry was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStatus {
    Placed,
    Skipped,
}

impl LayoutStatus {
    pub fn is_placed(self) -> bool {
        self == LayoutStatus::Placed
    }
}

/// Errors from building a layout tree out of a description.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{item}: minimum {minimum:?} / hint {hint:?} / maximum {maximum:?} are not ordered")]
    InconsistentSize {
        item: String,
        minimum: crate::primitives::Size,
        hint: crate::primitives::Size,
        maximum: crate::primitives::Size,
    },

    #[error("{item}: margins must not be negative")]
    NegativeMargin { item: String },

    #[error("{item}: spacing must not be negative (got {spacing})")]
    NegativeSpacing { item: String, spacing: i32 },

    #[error("{item}: flex weight must be finite and non-negative (got {flex})")]
    InvalidFlex { item: String, flex: f32 },

    #[error("root of the description is not a box")]
    RootNotBox,
}
