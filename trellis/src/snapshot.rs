//! Geometry snapshots of a solved tree.
//!
//! After a pass, `GeometrySnapshot::capture` walks an item tree and records
//! the rectangle every item was given. Snapshots are plain data: compare
//! them, look items up by name, or dump them as JSON.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layout::LayoutItem;
use crate::primitives::Rect;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub rect: Rect,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GeometrySnapshot>,
}

impl GeometrySnapshot {
    /// Record the current geometry of `item` and all of its descendants.
    pub fn capture(item: &dyn LayoutItem) -> Self {
        Self {
            name: item.name().map(str::to_string),
            rect: item.geometry(),
            children: item.children().iter().map(|child| Self::capture(&**child)).collect(),
        }
    }

    /// Depth-first search for the first node called `name`.
    pub fn find(&self, name: &str) -> Option<&GeometrySnapshot> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Number of nodes in this snapshot, including the root.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(GeometrySnapshot::node_count).sum::<usize>()
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
