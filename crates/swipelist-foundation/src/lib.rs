//! Swipe-to-dismiss foundation for Swipelist
//!
//! Turns a stream of touch events over a list into row animation directives
//! and, once a row has been swiped away, a callback naming the data-position
//! that should be removed.

pub mod config;
pub mod gesture_constants;
pub mod input;
pub mod list_host;
pub mod swipe_dismiss;
pub mod velocity_tracker;

pub use config::{ConfigError, SwipeConfig};
pub use input::{TouchEvent, TouchPhase};
pub use list_host::{hit_test, ListHost, RowHit, RowId, VisibleRow};
pub use swipe_dismiss::{
    DismissCompletion, DismissHandler, GestureState, ReleaseDecision, SwipeDirection,
    SwipeDirective, SwipeOutcome, SwipeToDismissTracker, TrackedRow,
};
pub use velocity_tracker::{Velocity, VelocityTracker, VelocityTracker1D};

pub use swipelist_animation::{RowAnimation, RowTransform};
pub use swipelist_ui_graphics::{Point, Rect, Size};
