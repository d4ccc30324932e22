//! Pure geometry for Swipelist
//!
//! Screen-space points, sizes and rectangles shared by the gesture tracker,
//! the list host contract and the test harness.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
