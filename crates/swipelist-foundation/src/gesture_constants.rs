//! Shared gesture constants for swipe-to-dismiss handling.
//!
//! Values are in logical (density-independent) pixels. Use
//! [`SwipeConfig::scaled`](crate::SwipeConfig::scaled) to convert them for a
//! particular display density.

/// Drag threshold in logical pixels.
///
/// A horizontal drag shorter than this is left to the list so it can still be
/// treated as a tap or a vertical scroll. Matches the platform touch slop.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Minimum release speed, in logical pixels per second, that counts as a fling.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Faster releases are treated as tracking noise rather than a fling.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Fraction of the row width a drag must exceed to dismiss without a fling.
pub const DISMISS_THRESHOLD_FRACTION: f32 = 1.0 / 3.0;

/// Opacity of a row dragged across its full width. Rows never fade out
/// completely while still under the finger.
pub const MIN_SWIPE_ALPHA: f32 = 0.2;

/// Constant speed, in pixels per second, used to size settle animations.
pub const SETTLE_SPEED: f32 = 800.0;
