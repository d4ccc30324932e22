//! Fade, distance and duration math for swiped rows.

use crate::config::SwipeConfig;
use crate::velocity_tracker::Velocity;

/// Opacity of a row displaced by `abs_dx` pixels.
///
/// Falls linearly from 1.0 at rest to `min_alpha` at a full-width drag and
/// stays there for larger displacements. A row without width counts as fully
/// swiped.
pub fn fade_alpha(abs_dx: f32, width: f32, min_alpha: f32) -> f32 {
    let fraction = if width > 0.0 {
        abs_dx.abs().min(width) / width
    } else {
        1.0
    };
    min_alpha + (1.0 - min_alpha) * (1.0 - fraction)
}

/// Milliseconds needed to cover `distance` pixels at `speed` px/s.
pub fn settle_duration_millis(distance: f32, speed: f32) -> f32 {
    (1000.0 * distance / speed).max(0.0)
}

/// Milliseconds left to slide a row the rest of the way off screen.
pub fn dismiss_duration_millis(width: f32, abs_dx: f32, speed: f32) -> f32 {
    if abs_dx >= width {
        0.0
    } else {
        settle_duration_millis(width - abs_dx, speed)
    }
}

/// Whether a drag alone is long enough to dismiss.
pub fn exceeds_dismiss_threshold(abs_dx: f32, width: f32, fraction: f32) -> bool {
    abs_dx > width * fraction
}

/// Horizontal release velocity if it qualifies as a fling, otherwise 0.0.
///
/// A fling must be within the configured speed range and more horizontal than
/// vertical.
pub fn accept_fling(velocity: Velocity, config: &SwipeConfig) -> f32 {
    let abs_x = velocity.x.abs();
    let abs_y = velocity.y.abs();
    let in_range = config.min_fling_velocity <= abs_x && abs_x <= config.max_fling_velocity;
    if in_range && abs_y < abs_x {
        velocity.x
    } else {
        0.0
    }
}
