//! Open/closed status carried across a teardown/recreate cycle.

use crate::drag::EdgeFlags;

/// Which edge, if any, held an open or opening panel.
///
/// Produced by [`PanelContainer::save_state`](crate::PanelContainer::save_state)
/// and consumed by value in
/// [`PanelContainer::restore_state`](crate::PanelContainer::restore_state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
    pub open_panel_edge: Option<EdgeFlags>,
}

impl SavedState {
    pub fn closed() -> Self {
        SavedState {
            open_panel_edge: None,
        }
    }

    pub fn open_at(edge: EdgeFlags) -> Self {
        SavedState {
            open_panel_edge: Some(edge),
        }
    }

    pub fn should_reopen(&self) -> bool {
        self.open_panel_edge.is_some_and(|edge| !edge.is_empty())
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let state = SavedState::open_at(EdgeFlags::LEFT);
        let json = serde_json::to_string(&state).unwrap();
        let back: SavedState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert!(back.should_reopen());
    }
}
