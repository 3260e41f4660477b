//! Declarative layout descriptions.
//!
//! A `LayoutNode` tree is plain data (serde, usually JSON) that builds into
//! live `LayoutItem`s. Building validates the invariants the solver assumes
//! but never checks itself: ordered sizes, non-negative margins and spacing,
//! and sane flex weights.
//!
//! ```json
//! {
//!   "type": "box",
//!   "direction": "left_to_right",
//!   "spacing": 10,
//!   "children": [
//!     { "type": "widget", "name": "a", "size_hint": { "width": 20, "height": 50 } },
//!     { "type": "widget", "name": "b", "size_hint": { "width": 30, "height": 50 }, "flex": 1 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layout::{BoxLayout, Direction, LayoutItem, Margins, Widget};
use crate::primitives::Size;

/// A node of a layout description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutNode {
    Widget(WidgetNode),
    Box(BoxNode),
}

/// Description of a leaf item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub size_hint: Size,
    /// Defaults to zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_size: Option<Size>,
    /// Defaults to unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_size: Option<Size>,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub flex: f32,
}

/// Description of a box container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub spacing: i32,
    #[serde(default)]
    pub content_margins: Margins,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub flex: f32,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            LayoutNode::Widget(w) => w.name.as_deref(),
            LayoutNode::Box(b) => b.name.as_deref(),
        }
    }

    /// Check the whole tree, reporting the first problem found.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let result = self.validate_at("root");
        if let Err(e) = &result {
            tracing::warn!("rejecting layout description: {}", e);
        }
        result
    }

    fn validate_at(&self, path: &str) -> Result<(), LayoutError> {
        let item = match self.name() {
            Some(name) => format!("{} ({})", path, name),
            None => path.to_string(),
        };

        match self {
            LayoutNode::Widget(w) => {
                let minimum = w.minimum_size.unwrap_or(Size::ZERO);
                let maximum = w.maximum_size.unwrap_or(Size::UNBOUNDED);
                if !minimum.fits_in(w.size_hint) || !w.size_hint.fits_in(maximum) {
                    return Err(LayoutError::InconsistentSize {
                        item,
                        minimum,
                        hint: w.size_hint,
                        maximum,
                    });
                }
                check_margins(&item, &w.margins)?;
                check_flex(&item, w.flex)
            }
            LayoutNode::Box(b) => {
                if b.spacing < 0 {
                    return Err(LayoutError::NegativeSpacing {
                        item,
                        spacing: b.spacing,
                    });
                }
                check_margins(&item, &b.content_margins)?;
                check_margins(&item, &b.margins)?;
                check_flex(&item, b.flex)?;
                for (i, child) in b.children.iter().enumerate() {
                    child.validate_at(&format!("{}/{}", path, i))?;
                }
                Ok(())
            }
        }
    }

    /// Validate and build a live item tree.
    pub fn build(&self) -> Result<Box<dyn LayoutItem>, LayoutError> {
        self.validate()?;
        Ok(self.build_unchecked())
    }

    /// Validate and build a tree whose root must be a box.
    pub fn build_box(&self) -> Result<BoxLayout, LayoutError> {
        self.validate()?;
        match self {
            LayoutNode::Box(b) => Ok(b.build_unchecked()),
            LayoutNode::Widget(_) => Err(LayoutError::RootNotBox),
        }
    }

    fn build_unchecked(&self) -> Box<dyn LayoutItem> {
        match self {
            LayoutNode::Widget(w) => Box::new(w.build_unchecked()),
            LayoutNode::Box(b) => Box::new(b.build_unchecked()),
        }
    }
}

impl WidgetNode {
    fn build_unchecked(&self) -> Widget {
        let mut widget = Widget::new(self.size_hint)
            .minimum(self.minimum_size.unwrap_or(Size::ZERO))
            .maximum(self.maximum_size.unwrap_or(Size::UNBOUNDED))
            .with_margins(self.margins)
            .with_flex(self.flex);
        if let Some(name) = &self.name {
            widget = widget.named(name.clone());
        }
        widget
    }
}

impl BoxNode {
    fn build_unchecked(&self) -> BoxLayout {
        let mut layout = BoxLayout::new(self.direction)
            .spacing(self.spacing)
            .content_margins(self.content_margins)
            .with_margins(self.margins)
            .with_flex(self.flex);
        if let Some(name) = &self.name {
            layout = layout.named(name.clone());
        }
        for child in &self.children {
            layout.layout_mut().add(child.build_unchecked());
        }
        layout
    }
}

fn check_margins(item: &str, margins: &Margins) -> Result<(), LayoutError> {
    if margins.is_non_negative() {
        Ok(())
    } else {
        Err(LayoutError::NegativeMargin {
            item: item.to_string(),
        })
    }
}

fn check_flex(item: &str, flex: f32) -> Result<(), LayoutError> {
    if flex.is_finite() && flex >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidFlex {
            item: item.to_string(),
            flex,
        })
    }
}

// =========================================================================
// Tests
// =========================================================================
