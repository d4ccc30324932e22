//! Scripted touch input and a manual frame clock.
//!
//! [`GestureRobot`] produces timestamped [`TouchEvent`]s the way a finger
//! would: every move advances the robot's clock, so velocity tracking sees a
//! realistic sample stream. [`TestFrameClock`] hands out frame timestamps for
//! driving row animations.
//!
//! # Example
//!
//! ```
//! use swipelist_testing::GestureRobot;
//!
//! let mut robot = GestureRobot::new();
//! let down = robot.down(20.0, 120.0);
//! let moves = robot.drag_by(90.0, 0.0, 6);
//! let up = robot.up();
//! assert_eq!(moves.len(), 6);
//! assert_eq!(up.position.x, 110.0);
//! assert!(up.uptime_ms > down.uptime_ms);
//! ```

use swipelist_foundation::{TouchEvent, TouchPhase};
use swipelist_ui_graphics::Point;

/// Milliseconds between consecutive moves, one 60 Hz frame.
pub const DEFAULT_MOVE_INTERVAL_MS: i64 = 16;

pub const FRAME_NANOS: u64 = 16_666_667;

/// Generates a single-pointer touch stream.
pub struct GestureRobot {
    now_ms: i64,
    position: Point,
    move_interval_ms: i64,
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRobot {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            position: Point::ZERO,
            move_interval_ms: DEFAULT_MOVE_INTERVAL_MS,
        }
    }

    /// Starts the robot's clock at `uptime_ms`.
    pub fn starting_at(mut self, uptime_ms: i64) -> Self {
        self.now_ms = uptime_ms;
        self
    }

    pub fn with_move_interval(mut self, interval_ms: i64) -> Self {
        self.move_interval_ms = interval_ms;
        self
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn down(&mut self, x: f32, y: f32) -> TouchEvent {
        self.position = Point::new(x, y);
        self.event(TouchPhase::Down)
    }

    pub fn down_at(&mut self, point: Point) -> TouchEvent {
        self.down(point.x, point.y)
    }

    /// Moves the pointer to `(x, y)` one move interval later.
    pub fn move_to(&mut self, x: f32, y: f32) -> TouchEvent {
        self.now_ms += self.move_interval_ms;
        self.position = Point::new(x, y);
        self.event(TouchPhase::Move)
    }

    /// Drags by `(dx, dy)` in `steps` evenly spaced moves.
    pub fn drag_by(&mut self, dx: f32, dy: f32, steps: usize) -> Vec<TouchEvent> {
        let steps = steps.max(1);
        let start = self.position;
        (1..=steps)
            .map(|step| {
                let fraction = step as f32 / steps as f32;
                self.move_to(start.x + dx * fraction, start.y + dy * fraction)
            })
            .collect()
    }

    /// Keeps the pointer still for `millis`.
    pub fn hold(&mut self, millis: i64) {
        self.now_ms += millis;
    }

    /// Lifts the pointer at its current position.
    pub fn up(&mut self) -> TouchEvent {
        self.event(TouchPhase::Up)
    }

    pub fn cancel(&mut self) -> TouchEvent {
        self.event(TouchPhase::Cancel)
    }

    /// A whole gesture: down at `from`, `steps` moves by `dx`, then up.
    pub fn swipe(&mut self, from: Point, dx: f32, steps: usize) -> Vec<TouchEvent> {
        let mut events = Vec::with_capacity(steps + 2);
        events.push(self.down_at(from));
        events.extend(self.drag_by(dx, 0.0, steps));
        events.push(self.up());
        events
    }

    fn event(&self, phase: TouchPhase) -> TouchEvent {
        TouchEvent::new(phase, self.position, self.now_ms)
    }
}

/// Manually advanced frame clock in nanoseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct TestFrameClock {
    now_nanos: u64,
}

impl TestFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now_nanos
    }

    /// Advances by one 60 Hz frame and returns the new frame time.
    pub fn tick(&mut self) -> u64 {
        self.now_nanos += FRAME_NANOS;
        self.now_nanos
    }

    pub fn advance_millis(&mut self, millis: f32) -> u64 {
        self.now_nanos += (millis.max(0.0) * 1_000_000.0) as u64;
        self.now_nanos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_advance_the_clock() {
        let mut robot = GestureRobot::new().starting_at(1_000).with_move_interval(10);
        let down = robot.down(5.0, 5.0);
        let moved = robot.move_to(15.0, 5.0);
        robot.hold(100);
        let up = robot.up();
        assert_eq!(down.uptime_ms, 1_000);
        assert_eq!(moved.uptime_ms, 1_010);
        assert_eq!(up.uptime_ms, 1_110);
        assert_eq!(up.phase, TouchPhase::Up);
        assert_eq!(up.position, Point::new(15.0, 5.0));
    }

    #[test]
    fn swipe_ends_at_the_target() {
        let mut robot = GestureRobot::new();
        let events = robot.swipe(Point::new(10.0, 40.0), -60.0, 3);
        let xs: Vec<f32> = events.iter().map(|event| event.position.x).collect();
        assert_eq!(xs, vec![10.0, -10.0, -30.0, -50.0, -50.0]);
        assert_eq!(events[0].phase, TouchPhase::Down);
        assert_eq!(events[4].phase, TouchPhase::Up);
    }

    #[test]
    fn frame_clock_ticks() {
        let mut clock = TestFrameClock::new();
        assert_eq!(clock.tick(), FRAME_NANOS);
        assert_eq!(clock.advance_millis(2.5), FRAME_NANOS + 2_500_000);
    }
}
