use std::rc::Weak;

use swipelist_animation::{AnimationPlayer, FinishedAnimation, RowTransform};
use swipelist_foundation::{
    ConfigError, DismissCompletion, DismissHandler, GestureState, ListHost, RowId, SwipeConfig,
    SwipeDirective, SwipeToDismissTracker, TouchEvent, TouchPhase,
};
use swipelist_ui_graphics::Point;
use web_time::Instant;

/// A list host with swipe-to-dismiss behaviour attached.
///
/// The host keeps ownership of layout and scrolling; this type only decides
/// how rows are transformed while they are swiped and when the dismiss
/// handler runs. Call [`on_frame`](Self::on_frame) from the render loop while
/// [`is_animating`](Self::is_animating) is true and draw each visible row with
/// [`row_transform`](Self::row_transform).
pub struct SwipeDismissList<H> {
    host: H,
    tracker: SwipeToDismissTracker,
    player: AnimationPlayer<RowId, DismissCompletion>,
    epoch: Instant,
}

impl<H: ListHost> SwipeDismissList<H> {
    pub fn new(host: H) -> Self {
        Self::from_tracker(host, SwipeToDismissTracker::new())
    }

    pub fn with_config(host: H, config: SwipeConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_tracker(
            host,
            SwipeToDismissTracker::with_config(config)?,
        ))
    }

    fn from_tracker(host: H, tracker: SwipeToDismissTracker) -> Self {
        Self {
            host,
            tracker,
            player: AnimationPlayer::new(),
            epoch: Instant::now(),
        }
    }

    /// See [`SwipeToDismissTracker::set_dismiss_handler`].
    pub fn set_dismiss_handler(&mut self, handler: Weak<dyn DismissHandler>) {
        self.tracker.set_dismiss_handler(handler);
    }

    pub fn clear_dismiss_handler(&mut self) {
        self.tracker.clear_dismiss_handler();
    }

    /// Routes a touch event through the swipe tracker. Returns false when the
    /// event should go on to the list's own scroll and click handling.
    pub fn on_touch(&mut self, event: &TouchEvent) -> bool {
        let outcome = self.tracker.handle(&self.host, event);
        if let Some(directive) = outcome.directive {
            self.apply(directive);
        }
        outcome.handled
    }

    /// Like [`on_touch`](Self::on_touch), stamping the event with the time
    /// elapsed since this list was created.
    pub fn on_touch_now(&mut self, phase: TouchPhase, position: Point) -> bool {
        let uptime_ms = self.epoch.elapsed().as_millis() as i64;
        self.on_touch(&TouchEvent::new(phase, position, uptime_ms))
    }

    /// Advances row animations to `frame_time_nanos`, running the dismiss
    /// handler for every row that finished sliding out. Returns how many rows
    /// were dismissed on this frame.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> usize {
        let mut dismissed = 0;
        for FinishedAnimation { key, end } in self.player.advance(frame_time_nanos) {
            let Some(completion) = end else {
                continue;
            };
            log::debug!("row {key:?} slid out, dismissing position {}", completion.position());
            let reset = completion.complete();
            self.player.play(key, reset, None);
            dismissed += 1;
        }
        dismissed
    }

    pub fn row_transform(&self, row: RowId) -> RowTransform {
        self.player.transform(row)
    }

    pub fn is_animating(&self) -> bool {
        self.player.is_animating()
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.tracker.state()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access for layout and scroll updates.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn apply(&mut self, directive: SwipeDirective) {
        let row = directive.row;
        if let Some(pending) = self.player.play(row, directive.animation, directive.on_end) {
            // The row was grabbed again mid slide-out. The dismissal still
            // stands; the new directive owns the row's transform from here.
            log::debug!(
                "row {row:?} taken over before its slide-out finished, dismissing position {} now",
                pending.position()
            );
            let _ = pending.complete();
        }
    }
}
