//! Animation system for Swipelist
//!
//! Describes the transient visual transform of a list row (horizontal
//! translation plus opacity), the tween directives that move a row between two
//! transforms, and a frame-driven player that runs those directives and hands
//! back their completion tokens.

mod animation;
mod player;

pub use animation::*;
pub use player::*;
