//! Measurement constraints.
//!
//! The container must be measured with exact sizes on both axes. Children
//! are measured with specs derived from the container's spec, their margins
//! and their declared [`Dimension`].

use crate::child::Dimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// The size is fixed.
    Exactly,
    /// Up to the given size.
    AtMost,
    /// No constraint; the size is a hint at most.
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    pub const fn exactly(size: i32) -> Self {
        MeasureSpec {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    pub const fn at_most(size: i32) -> Self {
        MeasureSpec {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    pub const fn unspecified() -> Self {
        MeasureSpec {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.mode == MeasureMode::Exactly
    }

    /// Exact spec used by design/preview tooling in place of an unresolved one.
    pub fn resolve_for_preview(self, fallback: i32) -> Self {
        match self.mode {
            MeasureMode::Exactly => self,
            MeasureMode::AtMost => MeasureSpec::exactly(self.size),
            MeasureMode::Unspecified => MeasureSpec::exactly(fallback),
        }
    }

    /// Final size for a child measured against this spec.
    pub fn resolve(&self, preferred: Option<i32>) -> i32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => preferred.map_or(self.size, |p| p.min(self.size)),
            MeasureMode::Unspecified => preferred.unwrap_or(0),
        }
    }
}

/// Child spec for one axis, given the parent's spec and the space consumed
/// by margins and insets (`padding`).
pub fn child_measure_spec(parent: MeasureSpec, padding: i32, dimension: Dimension) -> MeasureSpec {
    let size = (parent.size - padding).max(0);

    match (parent.mode, dimension) {
        (_, Dimension::Px(px)) => MeasureSpec::exactly(px.max(0)),
        (MeasureMode::Exactly, Dimension::MatchParent) => MeasureSpec::exactly(size),
        (MeasureMode::Exactly, Dimension::WrapContent) => MeasureSpec::at_most(size),
        (MeasureMode::AtMost, Dimension::MatchParent | Dimension::WrapContent) => {
            MeasureSpec::at_most(size)
        }
        (MeasureMode::Unspecified, Dimension::MatchParent | Dimension::WrapContent) => {
            MeasureSpec::unspecified()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_spec_fixed_width_ignores_parent() {
        let spec = child_measure_spec(MeasureSpec::exactly(800), 64, Dimension::Px(300));
        assert_eq!(spec, MeasureSpec::exactly(300));
    }

    #[test]
    fn test_child_spec_match_parent_subtracts_padding() {
        let spec = child_measure_spec(MeasureSpec::exactly(800), 64, Dimension::MatchParent);
        assert_eq!(spec, MeasureSpec::exactly(736));
    }

    #[test]
    fn test_child_spec_wrap_content_bounded() {
        let spec = child_measure_spec(MeasureSpec::exactly(800), 64, Dimension::WrapContent);
        assert_eq!(spec, MeasureSpec::at_most(736));
        assert_eq!(spec.resolve(Some(280)), 280);
        assert_eq!(spec.resolve(Some(1000)), 736);
        assert_eq!(spec.resolve(None), 736);
    }

    #[test]
    fn test_padding_never_negative() {
        let spec = child_measure_spec(MeasureSpec::exactly(40), 64, Dimension::MatchParent);
        assert_eq!(spec.size, 0);
    }

    #[test]
    fn test_preview_resolution() {
        assert_eq!(
            MeasureSpec::unspecified().resolve_for_preview(300),
            MeasureSpec::exactly(300)
        );
        assert_eq!(
            MeasureSpec::at_most(500).resolve_for_preview(300),
            MeasureSpec::exactly(500)
        );
    }
}
