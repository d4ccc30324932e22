//! Release velocity estimation for swipe gestures.
//!
//! Uses the impulse strategy: every pair of consecutive samples contributes
//! the kinetic energy needed to change the pointer's speed, and the final
//! energy is converted back into a velocity. Older samples weigh less because
//! later segments overwrite their contribution.

use swipelist_ui_graphics::Point;

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: i64 = 100;

/// A gap between consecutive samples longer than this means the pointer had
/// stopped, so nothing before the gap contributes.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Single-axis velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    /// Slot holding the newest sample.
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    /// Records the pointer `position` at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Velocity in units/second, or 0.0 with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Index 0 is the newest sample; times are negative ages.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut newer = newest;

        for offset in 0..HISTORY_SIZE {
            let slot = (self.newest + HISTORY_SIZE - offset) % HISTORY_SIZE;
            let Some(sample) = self.samples[slot] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            let gap = newer.time_ms - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            positions[count] = sample.position;
            times[count] = -(age as f32);
            count += 1;
            newer = sample;
        }

        if count < 2 {
            return 0.0;
        }

        let velocity_per_ms = impulse_velocity(&positions[..count], &times[..count]);
        if velocity_per_ms.is_finite() {
            velocity_per_ms * 1000.0
        } else {
            0.0
        }
    }

    /// Clears all tracked data.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// Impulse velocity over samples ordered newest first.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let older_time = times[i];
        let newer_time = times[i - 1];
        if older_time == newer_time {
            continue;
        }
        let segment_velocity = (positions[i - 1] - positions[i]) / (newer_time - older_time);
        let previous_velocity = kinetic_energy_to_velocity(work);
        work += (segment_velocity - previous_velocity) * segment_velocity.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// Converts kinetic energy to velocity using E = 0.5 * m * v^2 (with m = 1).
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

/// Planar velocity in pixels per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Tracks both axes of a pointer.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: i64, position: Point) {
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    pub fn calculate_velocity(&self) -> Velocity {
        Velocity::new(self.x.calculate_velocity(), self.y.calculate_velocity())
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        let tracker = VelocityTracker1D::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn single_point_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_velocity() {
        let mut tracker = VelocityTracker1D::new();
        // 100 px per 10ms = 10000 px/s
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        tracker.add_data_point(20, 200.0);
        tracker.add_data_point(30, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10_000.0).abs() < 1.0,
            "Expected ~10000, got {}",
            velocity
        );
    }

    #[test]
    fn negative_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 300.0);
        tracker.add_data_point(10, 200.0);
        tracker.add_data_point(20, 100.0);

        let velocity = tracker.calculate_velocity();
        assert!(velocity < 0.0, "Expected negative velocity, got {}", velocity);
    }

    #[test]
    fn reset_clears_history() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);

        tracker.reset();

        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn samples_beyond_horizon_are_ignored() {
        let mut tracker = VelocityTracker1D::new();
        // A slow start far in the past, then a steady 10 px/ms run.
        tracker.add_data_point(0, 0.0);
        for step in 0..14 {
            tracker.add_data_point(10 + step * 10, 1_000.0 + step as f32 * 100.0);
        }

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10_000.0).abs() < 1.0,
            "Expected ~10000, got {}",
            velocity
        );
    }

    #[test]
    fn gap_over_stopped_threshold_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);

        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn ring_buffer_wraps() {
        let mut tracker = VelocityTracker1D::new();
        for step in 0..(HISTORY_SIZE as i64 * 3) {
            tracker.add_data_point(step * 5, step as f32 * 10.0);
        }
        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 2_000.0).abs() < 1.0,
            "Expected ~2000, got {}",
            velocity
        );
    }

    #[test]
    fn planar_tracker_reports_both_axes() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Point::new(0.0, 0.0));
        tracker.add_position(10, Point::new(12.0, -3.0));
        tracker.add_position(20, Point::new(24.0, -6.0));

        let velocity = tracker.calculate_velocity();
        assert!((velocity.x - 1_200.0).abs() < 1.0, "x was {}", velocity.x);
        assert!((velocity.y + 300.0).abs() < 1.0, "y was {}", velocity.y);

        tracker.reset();
        assert_eq!(tracker.calculate_velocity(), Velocity::ZERO);
    }
}
