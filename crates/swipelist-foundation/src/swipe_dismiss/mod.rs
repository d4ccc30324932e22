//! Swipe-to-dismiss gesture tracking.
//!
//! [`SwipeToDismissTracker`] consumes the touch stream delivered to a list and
//! walks an explicit [`GestureState`]:
//!
//! - `Idle` → `Probing` on touch-down. The down event is always consumed. A
//!   down that interrupts a drag first snaps the dragged row back.
//! - `Probing` → `Dragging` once the horizontal drag exceeds the touch slop
//!   and the touch point lies on a visible row. Until then moves are left to
//!   the list so it can scroll or click.
//! - `Dragging` follows the finger with instant directives that translate the
//!   row and fade it.
//! - On release the row either slides off and reports its data-position to
//!   the [`DismissHandler`], or snaps back. Either way the tracker returns to
//!   `Idle`.
//!
//! The tracker never touches the row itself. It emits [`SwipeDirective`]s for
//! the host to play; a dismiss directive carries a [`DismissCompletion`] that
//! must be completed when the slide-out animation ends.

pub mod physics;

use std::fmt;
use std::rc::Weak;

use swipelist_animation::{RowAnimation, RowTransform};

use crate::config::{ConfigError, SwipeConfig};
use crate::input::{TouchEvent, TouchPhase};
use crate::list_host::{hit_test, ListHost, RowId};
use crate::velocity_tracker::VelocityTracker;

/// Removes a dismissed item from the data source behind the list.
pub trait DismissHandler {
    /// Called once per dismissed row, after its slide-out animation, with the
    /// row's absolute data-position.
    fn on_dismiss(&self, position: usize);
}

impl<F: Fn(usize)> DismissHandler for F {
    fn on_dismiss(&self, position: usize) {
        self(position)
    }
}

/// Which way a dismissed row leaves the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    fn from_sign(value: f32) -> Self {
        if value < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    }

    pub fn signum(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Row captured once a touch sequence turned into a swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedRow {
    pub id: RowId,
    /// Data-position at the moment the swipe started.
    pub position: usize,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// Finger is down but has not yet moved past the slop onto a row.
    Probing { anchor_x: f32 },
    /// `dx` is the displacement of the last directive sent for `row`.
    Dragging {
        anchor_x: f32,
        row: TrackedRow,
        dx: f32,
    },
}

impl GestureState {
    pub fn tracked_row(&self) -> Option<&TrackedRow> {
        match self {
            GestureState::Dragging { row, .. } => Some(row),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }
}

/// What the tracker decided when a swipe ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseDecision {
    Dismiss {
        row: RowId,
        position: usize,
        direction: SwipeDirection,
    },
    SnapBack {
        row: RowId,
    },
}

/// Deferred call to the [`DismissHandler`], attached to a slide-out directive.
#[derive(Clone)]
pub struct DismissCompletion {
    handler: Weak<dyn DismissHandler>,
    row: RowId,
    position: usize,
}

impl DismissCompletion {
    pub fn row(&self) -> RowId {
        self.row
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Reports the dismissal and returns the directive that restores the row,
    /// so the recycled view shows up untransformed once the data is gone.
    pub fn complete(self) -> RowAnimation {
        match self.handler.upgrade() {
            Some(handler) => handler.on_dismiss(self.position),
            None => log::warn!(
                "dismiss handler dropped before row {:?} (position {}) finished sliding out",
                self.row,
                self.position
            ),
        }
        RowAnimation::snap(RowTransform::IDENTITY)
    }
}

impl fmt::Debug for DismissCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissCompletion")
            .field("row", &self.row)
            .field("position", &self.position)
            .field("handler_alive", &(self.handler.strong_count() > 0))
            .finish()
    }
}

/// Animation the host should apply to a row.
#[derive(Clone, Debug)]
pub struct SwipeDirective {
    pub row: RowId,
    pub animation: RowAnimation,
    /// Present on slide-out directives; complete it when the animation ends.
    pub on_end: Option<DismissCompletion>,
}

/// Result of feeding one touch event to the tracker.
#[derive(Clone, Debug, Default)]
pub struct SwipeOutcome {
    /// Whether the event was consumed. Unhandled events belong to the list.
    pub handled: bool,
    pub directive: Option<SwipeDirective>,
    /// Set on the event that ended a swipe.
    pub release: Option<ReleaseDecision>,
}

impl SwipeOutcome {
    fn unhandled() -> Self {
        Self::default()
    }

    fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }

    fn with_directive(mut self, directive: SwipeDirective) -> Self {
        self.directive = Some(directive);
        self
    }
}

/// Per-list swipe-to-dismiss state machine.
pub struct SwipeToDismissTracker {
    config: SwipeConfig,
    state: GestureState,
    velocity: VelocityTracker,
    handler: Option<Weak<dyn DismissHandler>>,
}

impl Default for SwipeToDismissTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeToDismissTracker {
    pub fn new() -> Self {
        Self {
            config: SwipeConfig::default(),
            state: GestureState::Idle,
            velocity: VelocityTracker::new(),
            handler: None,
        }
    }

    pub fn with_config(config: SwipeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Registers the collaborator that removes dismissed items.
    ///
    /// Only a weak reference is kept; the owner controls its lifetime. A
    /// handler dropped by its owner behaves as if none was registered.
    pub fn set_dismiss_handler(&mut self, handler: Weak<dyn DismissHandler>) {
        self.handler = Some(handler);
    }

    pub fn clear_dismiss_handler(&mut self) {
        self.handler = None;
    }

    pub fn has_dismiss_handler(&self) -> bool {
        self.live_handler().is_some()
    }

    /// Feeds one touch event through the state machine.
    pub fn handle<H: ListHost + ?Sized>(&mut self, host: &H, event: &TouchEvent) -> SwipeOutcome {
        let state = std::mem::take(&mut self.state);
        let (next, outcome) = match event.phase {
            TouchPhase::Down => self.on_down(state, event),
            TouchPhase::Move => self.on_move(state, host, event),
            TouchPhase::Up => self.on_up(state, host, event),
            TouchPhase::Cancel => self.on_cancel(state, event),
        };
        self.state = next;
        outcome
    }

    fn on_down(
        &mut self,
        state: GestureState,
        event: &TouchEvent,
    ) -> (GestureState, SwipeOutcome) {
        // A down without the previous up still has a row held off its rest
        // position; hand it back before starting over.
        let outcome = match state {
            GestureState::Dragging { row, dx, .. } => {
                log::debug!("touch down while row {:?} was dragged, snapping back", row.id);
                self.snap_back(row, dx).1
            }
            _ => SwipeOutcome::handled(),
        };
        self.velocity.reset();
        self.velocity.add_position(event.uptime_ms, event.position);
        let anchor_x = event.position.x;
        log::trace!("touch down at x={anchor_x:.1}");
        (GestureState::Probing { anchor_x }, outcome)
    }

    fn on_move<H: ListHost + ?Sized>(
        &mut self,
        state: GestureState,
        host: &H,
        event: &TouchEvent,
    ) -> (GestureState, SwipeOutcome) {
        match state {
            GestureState::Idle => (GestureState::Idle, SwipeOutcome::unhandled()),
            GestureState::Probing { anchor_x } => {
                self.velocity.add_position(event.uptime_ms, event.position);
                let dx = event.position.x - anchor_x;
                if dx.abs() < self.config.touch_slop {
                    return (state, SwipeOutcome::unhandled());
                }
                let Some(hit) = hit_test(host, event.position) else {
                    return (state, SwipeOutcome::unhandled());
                };
                let row = TrackedRow {
                    id: hit.row,
                    position: hit.position,
                    width: hit.bounds.width,
                };
                log::debug!(
                    "swipe started on row {:?} (position {}, width {:.1})",
                    row.id,
                    row.position,
                    row.width
                );
                self.follow_finger(anchor_x, row, dx)
            }
            GestureState::Dragging { anchor_x, row, .. } => {
                self.velocity.add_position(event.uptime_ms, event.position);
                self.follow_finger(anchor_x, row, event.position.x - anchor_x)
            }
        }
    }

    fn follow_finger(
        &self,
        anchor_x: f32,
        row: TrackedRow,
        dx: f32,
    ) -> (GestureState, SwipeOutcome) {
        let alpha = physics::fade_alpha(dx.abs(), row.width, self.config.min_alpha);
        log::trace!("row {:?} dragged to dx={dx:.1} alpha={alpha:.3}", row.id);
        let directive = SwipeDirective {
            row: row.id,
            animation: RowAnimation::snap(RowTransform::new(dx, alpha)),
            on_end: None,
        };
        (
            GestureState::Dragging { anchor_x, row, dx },
            SwipeOutcome::handled().with_directive(directive),
        )
    }

    fn on_up<H: ListHost + ?Sized>(
        &mut self,
        state: GestureState,
        host: &H,
        event: &TouchEvent,
    ) -> (GestureState, SwipeOutcome) {
        let GestureState::Dragging { anchor_x, row, .. } = state else {
            return (GestureState::Idle, SwipeOutcome::unhandled());
        };
        self.velocity.add_position(event.uptime_ms, event.position);

        let dx = event.position.x - anchor_x;
        let abs_dx = dx.abs();
        let velocity = physics::accept_fling(self.velocity.calculate_velocity(), &self.config);
        let far_enough = physics::exceeds_dismiss_threshold(
            abs_dx,
            row.width,
            self.config.dismiss_threshold_fraction,
        );
        let released_on_row = hit_test(host, event.position).filter(|hit| hit.row == row.id);

        let dismiss = match (self.live_handler(), released_on_row) {
            (Some(handler), Some(hit)) if far_enough || velocity != 0.0 => Some((handler, hit)),
            _ => None,
        };

        let Some((handler, hit)) = dismiss else {
            log::debug!(
                "row {:?} released at dx={dx:.1} velocity={velocity:.1}, snapping back",
                row.id
            );
            return self.snap_back(row, dx);
        };

        let direction = if velocity != 0.0 {
            SwipeDirection::from_sign(velocity)
        } else {
            SwipeDirection::from_sign(dx)
        };
        let from = RowTransform::new(
            dx,
            physics::fade_alpha(abs_dx, row.width, self.config.min_alpha),
        );
        let to = RowTransform::new(
            row.width * direction.signum(),
            physics::fade_alpha(row.width, row.width, self.config.min_alpha),
        );
        let duration =
            physics::dismiss_duration_millis(row.width, abs_dx, self.config.settle_speed);
        log::debug!(
            "row {:?} released at dx={dx:.1} velocity={velocity:.1}, dismissing position {} {:?} over {duration:.1}ms",
            row.id,
            hit.position,
            direction
        );

        let outcome = SwipeOutcome {
            handled: true,
            directive: Some(SwipeDirective {
                row: row.id,
                animation: RowAnimation::tween(from, to, duration),
                on_end: Some(DismissCompletion {
                    handler,
                    row: row.id,
                    position: hit.position,
                }),
            }),
            release: Some(ReleaseDecision::Dismiss {
                row: row.id,
                position: hit.position,
                direction,
            }),
        };
        (GestureState::Idle, outcome)
    }

    fn on_cancel(&self, state: GestureState, event: &TouchEvent) -> (GestureState, SwipeOutcome) {
        match state {
            GestureState::Dragging { anchor_x, row, .. } => {
                log::debug!("swipe on row {:?} cancelled, snapping back", row.id);
                self.snap_back(row, event.position.x - anchor_x)
            }
            _ => (GestureState::Idle, SwipeOutcome::unhandled()),
        }
    }

    fn snap_back(&self, row: TrackedRow, dx: f32) -> (GestureState, SwipeOutcome) {
        let abs_dx = dx.abs();
        let from = RowTransform::new(
            dx,
            physics::fade_alpha(abs_dx, row.width, self.config.min_alpha),
        );
        let duration = physics::settle_duration_millis(abs_dx, self.config.settle_speed);
        let outcome = SwipeOutcome {
            handled: true,
            directive: Some(SwipeDirective {
                row: row.id,
                animation: RowAnimation::tween(from, RowTransform::IDENTITY, duration),
                on_end: None,
            }),
            release: Some(ReleaseDecision::SnapBack { row: row.id }),
        };
        (GestureState::Idle, outcome)
    }

    fn live_handler(&self) -> Option<Weak<dyn DismissHandler>> {
        self.handler
            .as_ref()
            .filter(|handler| handler.strong_count() > 0)
            .cloned()
    }
}

#[cfg(test)]
#[path = "../tests/swipe_dismiss_tests.rs"]
mod tests;
