//! Container configuration.

use slideout_core::Color;

/// Minimum gap kept between the panel's right edge and the container edge, in dp.
pub const MIN_PANEL_MARGIN_DP: f32 = 64.0;

/// Minimum fling velocity handed to the drag controller, in dp per second.
pub const MIN_FLING_VELOCITY_DP: f32 = 400.0;

/// Default scrim: black at 0x99 alpha.
pub const DEFAULT_SCRIM_ARGB: u32 = 0x9900_0000;

/// Whether a child's request to disallow interception is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisallowInterceptPolicy {
    /// Always honored; a disallow request also force-closes the panel.
    #[default]
    Always,
    /// Ignored while the drag controller reports a tracked edge touch.
    UnlessEdgeTouched,
}

/// Configuration for a [`PanelContainer`](crate::PanelContainer).
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Pixels per density-independent unit.
    pub density: f32,
    pub min_panel_margin_dp: f32,
    pub min_fling_velocity_dp: f32,
    pub touch_slop_sensitivity: f32,
    /// Movement tolerance for a tap, in px, before sensitivity scaling.
    pub touch_slop_px: f32,
    pub scrim_color: Color,
    pub disallow_intercept: DisallowInterceptPolicy,
    /// Tap on the dimmed content closes the panel. Off by default.
    pub tap_to_close: bool,
    /// Design/preview tooling: unresolved measure specs fall back to
    /// `preview_fallback_size` instead of failing.
    pub preview_mode: bool,
    pub preview_fallback_size: i32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            density: 1.0,
            min_panel_margin_dp: MIN_PANEL_MARGIN_DP,
            min_fling_velocity_dp: MIN_FLING_VELOCITY_DP,
            touch_slop_sensitivity: 1.0,
            touch_slop_px: 8.0,
            scrim_color: Color::from_argb(DEFAULT_SCRIM_ARGB),
            disallow_intercept: DisallowInterceptPolicy::Always,
            tap_to_close: false,
            preview_mode: false,
            preview_fallback_size: 300,
        }
    }
}

impl PanelConfig {
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_min_panel_margin_dp(mut self, dp: f32) -> Self {
        self.min_panel_margin_dp = dp;
        self
    }

    pub fn with_min_fling_velocity_dp(mut self, dp: f32) -> Self {
        self.min_fling_velocity_dp = dp;
        self
    }

    pub fn with_touch_slop_sensitivity(mut self, sensitivity: f32) -> Self {
        self.touch_slop_sensitivity = sensitivity;
        self
    }

    pub fn with_scrim_color(mut self, color: Color) -> Self {
        self.scrim_color = color;
        self
    }

    pub fn with_disallow_intercept(mut self, policy: DisallowInterceptPolicy) -> Self {
        self.disallow_intercept = policy;
        self
    }

    pub fn with_tap_to_close(mut self, enabled: bool) -> Self {
        self.tap_to_close = enabled;
        self
    }

    pub fn with_preview_mode(mut self, enabled: bool) -> Self {
        self.preview_mode = enabled;
        self
    }

    /// Panel margin floor in whole pixels, rounded half-up.
    pub fn min_panel_margin_px(&self) -> i32 {
        (self.min_panel_margin_dp * self.density + 0.5) as i32
    }

    pub fn min_fling_velocity_px(&self) -> f32 {
        self.min_fling_velocity_dp * self.density
    }

    /// Tap tolerance in px, scaled by sensitivity.
    pub fn tap_slop_px(&self) -> f32 {
        self.touch_slop_px * self.density / self.touch_slop_sensitivity.max(f32::EPSILON)
    }
}
