// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer configuration: display modes, scale limits, elastic margins, and
//! interaction toggles.

use vantage_bounds::Margins;
use vantage_motion::Easing;

/// How content should be initially positioned and scaled within the viewport.
///
/// The mode feeds the base (fit) transform; user gestures then apply on top
/// of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Scale down so the content fits entirely, never enlarging it.
    #[default]
    Fit,
    /// Scale up or down so the content fits entirely, preserving aspect
    /// ratio and never cropping.
    Fill,
    /// Scale so the content covers the whole viewport, cropping whatever
    /// overflows.
    Cover,
    /// Show the content at its original size (1:1).
    Original,
}

impl DisplayMode {
    /// The mode's stable name, used by the persisted-state surface.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::Cover => "cover",
            Self::Original => "original",
        }
    }

    /// Parses a mode from its stable name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fit" => Some(Self::Fit),
            "fill" => Some(Self::Fill),
            "cover" => Some(Self::Cover),
            "original" => Some(Self::Original),
            _ => None,
        }
    }
}

/// Configuration for a [`Viewer`](crate::Viewer).
///
/// Numeric fields are validated at the point of assignment: a setter given
/// an out-of-domain value returns `false` and retains the previous value, so
/// the configuration is never partially mutated. The boolean interaction
/// toggles have no invalid states and are plain public fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    min_scale: f64,
    max_scale: f64,
    scale_jump: f64,
    min_scale_margin: f64,
    max_scale_margin: f64,
    scroll_margins: Margins,
    animation_duration_ms: u32,
    easing: Easing,
    /// Whether two-finger rotation updates the transform.
    pub rotation_enabled: bool,
    /// Whether pinch gestures update the scale.
    pub scale_enabled: bool,
    /// Whether drag gestures scroll the content.
    pub scroll_enabled: bool,
    /// Whether scroll deltas reported with more than one pointer apply.
    pub two_finger_scroll_enabled: bool,
    /// Whether double taps toggle the zoom ladder.
    pub double_tap_enabled: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 8.0,
            scale_jump: 2.0,
            min_scale_margin: 0.0,
            max_scale_margin: 0.0,
            scroll_margins: Margins::ZERO,
            animation_duration_ms: 250,
            easing: Easing::default(),
            rotation_enabled: true,
            scale_enabled: true,
            scroll_enabled: true,
            two_finger_scroll_enabled: true,
            double_tap_enabled: true,
        }
    }
}

impl ViewerConfig {
    /// The minimum user scale (relative to the fitted base transform).
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Sets the minimum user scale. Must be positive.
    pub fn set_min_scale(&mut self, value: f64) -> bool {
        let ok = value > 0.0;
        if ok {
            self.min_scale = value;
        }
        ok
    }

    /// The maximum user scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the maximum user scale. Must be positive.
    pub fn set_max_scale(&mut self, value: f64) -> bool {
        let ok = value > 0.0;
        if ok {
            self.max_scale = value;
        }
        ok
    }

    /// The additive scale increment applied per zoom-in double tap.
    #[must_use]
    pub fn scale_jump(&self) -> f64 {
        self.scale_jump
    }

    /// Sets the double-tap scale increment. Must be at least 1.
    pub fn set_scale_jump(&mut self, value: f64) -> bool {
        let ok = value >= 1.0;
        if ok {
            self.scale_jump = value;
        }
        ok
    }

    /// Elastic allowance below `min_scale` during a live pinch.
    #[must_use]
    pub fn min_scale_margin(&self) -> f64 {
        self.min_scale_margin
    }

    /// Sets the elastic under-scale allowance. Must be non-negative.
    pub fn set_min_scale_margin(&mut self, value: f64) -> bool {
        let ok = value >= 0.0;
        if ok {
            self.min_scale_margin = value;
        }
        ok
    }

    /// Elastic allowance above `max_scale` during a live pinch.
    #[must_use]
    pub fn max_scale_margin(&self) -> f64 {
        self.max_scale_margin
    }

    /// Sets the elastic over-scale allowance. Must be non-negative.
    pub fn set_max_scale_margin(&mut self, value: f64) -> bool {
        let ok = value >= 0.0;
        if ok {
            self.max_scale_margin = value;
        }
        ok
    }

    /// Per-edge elastic drag allowances.
    #[must_use]
    pub fn scroll_margins(&self) -> Margins {
        self.scroll_margins
    }

    /// Sets the per-edge drag allowances. All four must be non-negative.
    pub fn set_scroll_margins(&mut self, margins: Margins) -> bool {
        let ok = margins.left >= 0.0
            && margins.top >= 0.0
            && margins.right >= 0.0
            && margins.bottom >= 0.0;
        if ok {
            self.scroll_margins = margins;
        }
        ok
    }

    /// Duration of animated corrections, in milliseconds.
    #[must_use]
    pub fn animation_duration_ms(&self) -> u32 {
        self.animation_duration_ms
    }

    /// Sets the animated-correction duration.
    pub fn set_animation_duration_ms(&mut self, value: u32) {
        self.animation_duration_ms = value;
    }

    /// Easing curve applied to animated corrections.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Sets the easing curve for animated corrections.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }
}

#[cfg(test)]
mod tests {
    use vantage_bounds::Margins;

    use super::*;

    #[test]
    fn display_mode_names_round_trip() {
        for mode in [
            DisplayMode::Fit,
            DisplayMode::Fill,
            DisplayMode::Cover,
            DisplayMode::Original,
        ] {
            assert_eq!(DisplayMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(DisplayMode::from_name("stretch"), None);
    }

    #[test]
    fn rejected_values_leave_the_previous_ones_in_place() {
        let mut config = ViewerConfig::default();

        assert!(config.set_min_scale(0.5));
        assert!(!config.set_min_scale(0.0));
        assert!(!config.set_min_scale(-1.0));
        assert_eq!(config.min_scale(), 0.5);

        assert!(!config.set_max_scale(0.0));
        assert_eq!(config.max_scale(), 8.0);

        assert!(!config.set_scale_jump(0.9));
        assert_eq!(config.scale_jump(), 2.0);

        assert!(!config.set_min_scale_margin(-0.1));
        assert_eq!(config.min_scale_margin(), 0.0);

        assert!(!config.set_scroll_margins(Margins::new(4.0, 4.0, -1.0, 4.0)));
        assert_eq!(config.scroll_margins(), Margins::ZERO);
        assert!(config.set_scroll_margins(Margins::uniform(12.0)));
        assert_eq!(config.scroll_margins(), Margins::uniform(12.0));
    }
}
