//! Error types for the panel container.

use std::fmt;

use crate::child::ChildId;
use crate::measure::MeasureMode;

/// Precondition violations reported by the container.
///
/// These indicate a misconfigured container (wrong children, wrong
/// measurement constraints, wrong target view), not a runtime condition
/// that can be retried.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelError {
    /// Measurement was requested without exact constraints on both axes.
    UnresolvedMeasureSpec {
        width: MeasureMode,
        height: MeasureMode,
    },

    /// A second panel child was found during measurement.
    DuplicatePanel {
        existing: ChildId,
        duplicate: ChildId,
    },

    /// A second content child was found during measurement.
    DuplicateContent {
        existing: ChildId,
        duplicate: ChildId,
    },

    /// The inserted child carries neither the panel nor the content tag.
    MissingRole { child: ChildId },

    /// A child with this id is already attached.
    DuplicateChild { child: ChildId },

    /// An operation needed the panel child but none is attached.
    NoPanel,

    /// The given child exists but is not the panel.
    NotAPanel { child: ChildId },

    /// No child with this id is attached.
    UnknownChild { child: ChildId },
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::UnresolvedMeasureSpec { width, height } => write!(
                f,
                "Panel container must be measured with exact constraints (got width {:?}, height {:?})",
                width, height
            ),
            PanelError::DuplicatePanel {
                existing,
                duplicate,
            } => write!(
                f,
                "Child {} is a panel but this container already has panel {}",
                duplicate, existing
            ),
            PanelError::DuplicateContent {
                existing,
                duplicate,
            } => write!(
                f,
                "Child {} is content but this container already has content {}",
                duplicate, existing
            ),
            PanelError::MissingRole { child } => write!(
                f,
                "Child {} is neither a panel nor a content child",
                child
            ),
            PanelError::DuplicateChild { child } => {
                write!(f, "Child {} is already attached", child)
            }
            PanelError::NoPanel => write!(f, "No panel child attached"),
            PanelError::NotAPanel { child } => write!(f, "Child {} is not a sliding panel", child),
            PanelError::UnknownChild { child } => write!(f, "Child {} is not attached", child),
        }
    }
}

impl std::error::Error for PanelError {}

/// Result alias for container operations.
pub type Result<T> = std::result::Result<T, PanelError>;
