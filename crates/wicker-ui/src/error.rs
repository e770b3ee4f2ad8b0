use std::fmt;

use crate::tree::WidgetId;

/// Failure of a checked widget-tree operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Checked child access past the end of a child list.
    IndexOutOfBounds { index: usize, len: usize },
    /// Child range not within `0..=len` or reversed.
    InvalidRange { start: usize, end: usize, len: usize },
    /// The handle refers to a widget that was erased (or never existed here).
    StaleWidget(WidgetId),
    /// The widget already has a parent (or is the root).
    AlreadyAttached(WidgetId),
    /// Attaching `child` under `parent` would make a node its own ancestor.
    WouldCycle { parent: WidgetId, child: WidgetId },
    /// The root is owned by the tree itself and cannot be erased.
    RootNotErasable,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::IndexOutOfBounds { index, len } => {
                write!(f, "child index {index} out of bounds (len {len})")
            }
            TreeError::InvalidRange { start, end, len } => {
                write!(f, "child range {start}..{end} invalid (len {len})")
            }
            TreeError::StaleWidget(id) => write!(f, "widget {id:?} is not in the tree"),
            TreeError::AlreadyAttached(id) => write!(f, "widget {id:?} already has a parent"),
            TreeError::WouldCycle { parent, child } => {
                write!(f, "attaching {child:?} under {parent:?} would create a cycle")
            }
            TreeError::RootNotErasable => f.write_str("the root widget cannot be erased"),
        }
    }
}

impl std::error::Error for TreeError {}
