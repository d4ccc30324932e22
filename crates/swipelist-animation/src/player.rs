//! Frame-driven playback of row directives.
//!
//! The player keeps at most one running directive per key. Each running
//! directive latches its start time on the first frame it sees, exactly like a
//! tween animatable does, so directives started between frames begin at the
//! next frame rather than jumping ahead.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::{RowAnimation, RowTransform};

struct RunningAnimation<E> {
    animation: RowAnimation,
    start_time_nanos: Option<u64>,
    current: RowTransform,
    end: Option<E>,
}

/// A directive that reached its end during [`AnimationPlayer::advance`].
#[derive(Debug, PartialEq)]
pub struct FinishedAnimation<K, E> {
    pub key: K,
    /// Completion token attached when the directive was played.
    pub end: Option<E>,
}

/// Finished directives for one frame; usually zero or one.
pub type FinishedAnimations<K, E> = SmallVec<[FinishedAnimation<K, E>; 2]>;

/// Plays [`RowAnimation`]s per key against a nanosecond frame clock.
///
/// `E` is an opaque completion token returned to the caller when the
/// directive it was attached to finishes.
pub struct AnimationPlayer<K, E> {
    running: BTreeMap<K, RunningAnimation<E>>,
    settled: BTreeMap<K, RowTransform>,
}

impl<K: Copy + Ord, E> Default for AnimationPlayer<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Ord, E> AnimationPlayer<K, E> {
    pub fn new() -> Self {
        Self {
            running: BTreeMap::new(),
            settled: BTreeMap::new(),
        }
    }

    /// Starts `animation` on `key`, replacing whatever was running there.
    ///
    /// Instant directives show their end state straight away and are reported
    /// finished on the next [`advance`](Self::advance). If the replaced
    /// directive carried a completion token it is returned so the caller can
    /// still honour it.
    pub fn play(&mut self, key: K, animation: RowAnimation, end: Option<E>) -> Option<E> {
        self.settled.remove(&key);
        let current = if animation.is_instant() {
            animation.to
        } else {
            animation.from
        };
        let replaced = self.running.insert(
            key,
            RunningAnimation {
                animation,
                start_time_nanos: None,
                current,
                end,
            },
        );
        replaced.and_then(|previous| {
            if previous.end.is_some() {
                log::debug!("replacing a row animation that still had a completion pending");
            }
            previous.end
        })
    }

    /// Advances every running directive to `frame_time_nanos`.
    ///
    /// Directives finishing on the same frame are reported in key order.
    pub fn advance(&mut self, frame_time_nanos: u64) -> FinishedAnimations<K, E> {
        let mut done: SmallVec<[K; 2]> = SmallVec::new();
        for (key, running) in self.running.iter_mut() {
            let start = *running.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_millis = frame_time_nanos.saturating_sub(start) as f32 / 1_000_000.0;
            running.current = running.animation.value_at(elapsed_millis);
            if running.animation.progress_at(elapsed_millis) >= 1.0 {
                done.push(*key);
            }
        }

        let mut finished = FinishedAnimations::new();
        for key in done {
            if let Some(running) = self.running.remove(&key) {
                let settled = running.animation.settled_value();
                if !settled.is_identity() {
                    self.settled.insert(key, settled);
                }
                finished.push(FinishedAnimation {
                    key,
                    end: running.end,
                });
            }
        }
        finished
    }

    /// Transform currently shown for `key`.
    pub fn transform(&self, key: K) -> RowTransform {
        if let Some(running) = self.running.get(&key) {
            return running.current;
        }
        self.settled
            .get(&key)
            .copied()
            .unwrap_or(RowTransform::IDENTITY)
    }

    pub fn is_running(&self, key: K) -> bool {
        self.running.contains_key(&key)
    }

    /// Returns true while any directive still needs frames.
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Drops all state for `key` (for example when its row is recycled),
    /// returning the pending completion token if there was one.
    pub fn forget(&mut self, key: K) -> Option<E> {
        self.settled.remove(&key);
        self.running.remove(&key).and_then(|running| running.end)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
