//! Slide offset model.
//!
//! Each child carries a normalized `on_screen` value in `[0.5, 1.0]`:
//! 0.5 is collapsed, 1.0 fully revealed. The panel's own position uses the
//! value directly (fraction of its width on screen), and the content's
//! displacement is the reveal beyond 0.5 scaled by [`CONTENT_OFFSET_FACTOR`].

use bitflags::bitflags;

/// `on_screen` of a collapsed panel.
pub const DRAWER_ON_SCREEN: f32 = 0.5;

/// Content moves this many pixels per pixel of panel reveal (`1 / DRAWER_ON_SCREEN`).
pub const CONTENT_OFFSET_FACTOR: i32 = 2;

/// Slow releases past this offset settle open.
pub const OPEN_RELEASE_THRESHOLD: f32 = 0.75;

bitflags! {
    /// Open/close protocol flags of a child.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OpenState: u8 {
        /// Fully open; set at an idle checkpoint with `on_screen >= 1`.
        const OPENED  = 1 << 0;
        /// An animated open is in flight.
        const OPENING = 1 << 1;
        /// An animated close is in flight.
        const CLOSING = 1 << 2;
    }
}

impl OpenState {
    /// Transient animation flags.
    pub const TRANSIENT: Self = Self::OPENING.union(Self::CLOSING);
}

/// Result of evaluating a child at an idle checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    /// Rests fully open.
    Open,
    /// Rests collapsed.
    Closed,
    /// Somewhere in between; not a checkpoint.
    Between,
}

/// Clamp a raw offset into the valid `[0.5, 1.0]` range.
#[inline]
pub fn clamp_offset(offset: f32) -> f32 {
    offset.clamp(DRAWER_ON_SCREEN, 1.0)
}

/// Panel offset implied by the content's left edge.
///
/// Returns `None` for a zero-width panel.
pub fn offset_for_content_left(content_left: i32, panel_width: i32) -> Option<f32> {
    if panel_width <= 0 {
        return None;
    }
    let reveal = content_left as f32 / CONTENT_OFFSET_FACTOR as f32 / panel_width as f32;
    Some(DRAWER_ON_SCREEN + reveal)
}

/// Left edge of a panel of `width` at `on_screen`.
pub fn panel_left(width: i32, on_screen: f32) -> i32 {
    if on_screen > 1.0 {
        0
    } else {
        -width + (width as f32 * on_screen) as i32
    }
}

/// Content left edge for a panel of `width` at `on_screen` (before margins).
///
/// The reveal beyond the collapsed baseline is scaled before rounding, so a
/// fully open panel of any width puts the content at exactly `width`.
pub fn content_offset_px(width: i32, on_screen: f32) -> i32 {
    let reveal = width as f32 * (on_screen - DRAWER_ON_SCREEN);
    (reveal * CONTENT_OFFSET_FACTOR as f32).round() as i32
}

/// Scrim strength in `[0, 1]` for the largest `on_screen` among children.
pub fn scrim_fraction(max_on_screen: f32) -> f32 {
    ((max_on_screen - DRAWER_ON_SCREEN) / DRAWER_ON_SCREEN).clamp(0.0, 1.0)
}

/// Runtime slide state stored alongside a child's declared params.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideParams {
    pub(crate) on_screen: f32,
    pub(crate) open_state: OpenState,
}

impl Default for SlideParams {
    fn default() -> Self {
        SlideParams {
            on_screen: DRAWER_ON_SCREEN,
            open_state: OpenState::empty(),
        }
    }
}

impl SlideParams {
    pub fn on_screen(&self) -> f32 {
        self.on_screen
    }

    pub fn open_state(&self) -> OpenState {
        self.open_state
    }

    pub fn is_opened(&self) -> bool {
        self.open_state.contains(OpenState::OPENED)
    }

    /// Visible at all, not just fully open.
    pub fn is_visible(&self) -> bool {
        self.on_screen > DRAWER_ON_SCREEN
    }

    /// Store a new offset. Returns the stored value when it changed.
    ///
    /// An input equal to the current value is a no-op even before clamping,
    /// and a clamped value equal to the current one is a no-op too.
    pub(crate) fn set_offset(&mut self, offset: f32) -> Option<f32> {
        if offset == self.on_screen {
            return None;
        }
        let clamped = clamp_offset(offset);
        if clamped == self.on_screen {
            return None;
        }
        self.on_screen = clamped;
        Some(clamped)
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        if self.on_screen <= DRAWER_ON_SCREEN {
            Checkpoint::Closed
        } else if self.on_screen >= 1.0 {
            Checkpoint::Open
        } else {
            Checkpoint::Between
        }
    }

    /// Whether a saved state should reopen this child: resting open or mid-open.
    pub(crate) fn wants_reopen(&self) -> bool {
        self.open_state == OpenState::OPENED || self.open_state == OpenState::OPENING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_offset_clamps_into_range() {
        let mut params = SlideParams::default();
        assert_eq!(params.set_offset(1.7), Some(1.0));
        assert_eq!(params.on_screen(), 1.0);
        assert_eq!(params.set_offset(-3.0), Some(0.5));
        assert_eq!(params.on_screen(), 0.5);
    }

    #[test]
    fn test_set_offset_unchanged_is_noop() {
        let mut params = SlideParams::default();
        assert_eq!(params.set_offset(0.5), None);
        // Clamps to the current value.
        assert_eq!(params.set_offset(0.2), None);
        assert_eq!(params.set_offset(0.8), Some(0.8));
        assert_eq!(params.set_offset(0.8), None);
    }

    #[test]
    fn test_checkpoints() {
        let mut params = SlideParams::default();
        assert_eq!(params.checkpoint(), Checkpoint::Closed);
        params.set_offset(0.75);
        assert_eq!(params.checkpoint(), Checkpoint::Between);
        params.set_offset(1.0);
        assert_eq!(params.checkpoint(), Checkpoint::Open);
    }

    #[test]
    fn test_first_layout_geometry() {
        // 300px panel, collapsed.
        assert_eq!(panel_left(300, 0.5), -150);
        assert_eq!(content_offset_px(300, 0.5), 0);
        // Fully open: content clears the panel exactly.
        assert_eq!(panel_left(300, 1.0), 0);
        assert_eq!(content_offset_px(300, 1.0), 300);
        // Defensive clamp.
        assert_eq!(panel_left(300, 1.2), 0);
    }

    #[test]
    fn test_odd_width_content_offset() {
        assert_eq!(panel_left(301, 0.5), -151);
        assert_eq!(content_offset_px(301, 0.5), 0);
        assert_eq!(content_offset_px(301, 1.0), 301);
        assert_eq!(content_offset_px(995, 1.0), 995);
    }

    #[test]
    fn test_content_offset_follows_drag() {
        // Every content position the drag clamp allows maps back to itself.
        for width in [300, 301, 995] {
            for left in 0..=width {
                let offset = offset_for_content_left(left, width).unwrap();
                assert_eq!(content_offset_px(width, offset), left, "width {width}");
            }
        }
    }

    #[test]
    fn test_offset_for_content_left() {
        let offset = offset_for_content_left(250, 300).unwrap();
        assert!((offset - 0.916_666_7).abs() < 1e-5);
        assert!(offset > OPEN_RELEASE_THRESHOLD);
        assert_eq!(offset_for_content_left(300, 300), Some(1.0));
        assert_eq!(offset_for_content_left(0, 300), Some(0.5));
        assert_eq!(offset_for_content_left(10, 0), None);
    }

    #[test]
    fn test_scrim_fraction() {
        assert_eq!(scrim_fraction(0.5), 0.0);
        assert_eq!(scrim_fraction(0.0), 0.0);
        assert!((scrim_fraction(0.75) - 0.5).abs() < 1e-6);
        assert_eq!(scrim_fraction(1.0), 1.0);
    }

    #[test]
    fn test_wants_reopen() {
        let mut params = SlideParams::default();
        assert!(!params.wants_reopen());
        params.open_state = OpenState::OPENING;
        assert!(params.wants_reopen());
        params.open_state = OpenState::OPENED | OpenState::CLOSING;
        assert!(!params.wants_reopen());
        params.open_state = OpenState::OPENED;
        assert!(params.wants_reopen());
    }
}
