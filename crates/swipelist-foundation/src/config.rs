//! Tunables for the swipe gesture.

use thiserror::Error;

use crate::gesture_constants::{
    DISMISS_THRESHOLD_FRACTION, DRAG_THRESHOLD, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY,
    MIN_SWIPE_ALPHA, SETTLE_SPEED,
};

/// Configuration rejected by [`SwipeConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("fling range is inverted: min {min} > max {max}")]
    InvertedFlingRange { min: f32, max: f32 },
    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },
}

/// Thresholds and speeds used by [`SwipeToDismissTracker`](crate::SwipeToDismissTracker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal distance before a touch becomes a swipe.
    pub touch_slop: f32,
    /// Smallest accepted release speed (px/s).
    pub min_fling_velocity: f32,
    /// Largest accepted release speed (px/s).
    pub max_fling_velocity: f32,
    /// Fraction of the row width that dismisses without a fling.
    pub dismiss_threshold_fraction: f32,
    /// Opacity at a full-width drag.
    pub min_alpha: f32,
    /// Speed (px/s) used to derive settle and dismiss durations.
    pub settle_speed: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            dismiss_threshold_fraction: DISMISS_THRESHOLD_FRACTION,
            min_alpha: MIN_SWIPE_ALPHA,
            settle_speed: SETTLE_SPEED,
        }
    }
}

impl SwipeConfig {
    /// Default configuration with slop and fling bounds scaled by `density`,
    /// the physical pixels per logical pixel of the display.
    ///
    /// The settle speed is left untouched: durations are defined in physical
    /// pixels per second.
    pub fn scaled(density: f32) -> Self {
        let defaults = Self::default();
        Self {
            touch_slop: defaults.touch_slop * density,
            min_fling_velocity: defaults.min_fling_velocity * density,
            max_fling_velocity: defaults.max_fling_velocity * density,
            ..defaults
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_fling_range(mut self, min: f32, max: f32) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("touch_slop", self.touch_slop),
            ("min_fling_velocity", self.min_fling_velocity),
            ("max_fling_velocity", self.max_fling_velocity),
            ("dismiss_threshold_fraction", self.dismiss_threshold_fraction),
            ("min_alpha", self.min_alpha),
            ("settle_speed", self.settle_speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.touch_slop < 0.0 {
            return Err(ConfigError::Negative {
                field: "touch_slop",
                value: self.touch_slop,
            });
        }
        if self.settle_speed <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "settle_speed",
                value: self.settle_speed,
            });
        }
        if self.min_fling_velocity < 0.0 {
            return Err(ConfigError::Negative {
                field: "min_fling_velocity",
                value: self.min_fling_velocity,
            });
        }
        if self.min_fling_velocity > self.max_fling_velocity {
            return Err(ConfigError::InvertedFlingRange {
                min: self.min_fling_velocity,
                max: self.max_fling_velocity,
            });
        }
        for (field, value) in [
            ("dismiss_threshold_fraction", self.dismiss_threshold_fraction),
            ("min_alpha", self.min_alpha),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }
        Ok(())
    }
}
