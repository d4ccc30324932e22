//! Swipe-to-dismiss list widget glue for Swipelist
//!
//! [`SwipeDismissList`] wires a [`SwipeToDismissTracker`] to a list host and
//! an [`AnimationPlayer`]: touch events go in, row transforms come out on
//! every frame, and the dismiss handler is called when a row finishes sliding
//! off screen.

mod swipe_dismiss_list;

pub use swipe_dismiss_list::SwipeDismissList;

pub use swipelist_animation::{AnimationPlayer, RowAnimation, RowTransform};
pub use swipelist_foundation::{
    ConfigError, DismissHandler, GestureState, ListHost, RowId, SwipeConfig,
    SwipeToDismissTracker, TouchEvent, TouchPhase, VisibleRow,
};
pub use swipelist_ui_graphics::{Point, Rect, Size};
