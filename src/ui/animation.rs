//! Animation system for the volume control
//!
//! Wraps `iced_anim` transitions into explicit, host-ticked animations.
//! The host calls `tick` on every frame while `is_animating` is true.

mod settle;

pub use settle::{SETTLE_DURATION, SettleAnimation};
