use swipelist_ui_graphics::Point;

/// Phase of a single-pointer touch sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One touch sample in raw screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Point,
    /// Monotonic timestamp in milliseconds.
    pub uptime_ms: i64,
}

impl TouchEvent {
    pub const fn new(phase: TouchPhase, position: Point, uptime_ms: i64) -> Self {
        Self {
            phase,
            position,
            uptime_ms,
        }
    }

    pub const fn down(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(TouchPhase::Down, Point::new(x, y), uptime_ms)
    }

    pub const fn moved(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(TouchPhase::Move, Point::new(x, y), uptime_ms)
    }

    pub const fn up(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(TouchPhase::Up, Point::new(x, y), uptime_ms)
    }

    pub const fn cancel(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(TouchPhase::Cancel, Point::new(x, y), uptime_ms)
    }
}
