//! Accessibility exposure of children.
//!
//! While a panel is open, the content and any other panel are hidden from
//! assistive technology; otherwise the content is exposed and panels are not.

use crate::child::{Child, ChildId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessibilityImportance {
    #[default]
    Visible,
    /// The child and its whole subtree are hidden.
    HiddenSubtree,
}

/// How the container itself presents to an accessibility bridge.
///
/// The container is focusable so it can receive back input, but it must
/// not be announced as a focus target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityNodeInfo {
    pub class_name: &'static str,
    pub focusable: bool,
    pub focused: bool,
    /// Children to expose, in child order.
    pub children: Vec<ChildId>,
}

pub struct VisibilityManager;

impl VisibilityManager {
    pub const CLASS_NAME: &'static str = "slideout::PanelContainer";

    /// Importance a newly attached child starts with.
    pub fn initial_importance(child: &Child, any_panel_open: bool) -> AccessibilityImportance {
        if any_panel_open || child.is_panel() {
            AccessibilityImportance::HiddenSubtree
        } else {
            AccessibilityImportance::Visible
        }
    }

    /// Recompute importance after `panel` opened (`is_open`) or closed.
    pub fn update(children: &mut [Child], panel: ChildId, is_open: bool) {
        for child in children.iter_mut() {
            let exposed = if is_open {
                child.id == panel
            } else {
                !child.is_panel()
            };
            child.importance = if exposed {
                AccessibilityImportance::Visible
            } else {
                AccessibilityImportance::HiddenSubtree
            };
        }
    }

    /// Children to expose when the bridge cannot hide subtrees itself.
    pub fn accessible_children(children: &[Child]) -> Vec<ChildId> {
        children
            .iter()
            .filter(|child| child.importance != AccessibilityImportance::HiddenSubtree)
            .map(|child| child.id)
            .collect()
    }

    pub fn node_info(children: &[Child]) -> AccessibilityNodeInfo {
        AccessibilityNodeInfo {
            class_name: Self::CLASS_NAME,
            focusable: false,
            focused: false,
            children: Self::accessible_children(children),
        }
    }
}
