//! Release spring-back for the volume control
//!
//! When a drag ends the control jumps to its settled state in the model,
//! while the view keeps blending from the pre-release snapshot towards it.
//! The blend is driven by an `iced_anim` transition on a 0..1 progress value.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::features::VolumeState;

/// Default spring-back duration
pub const SETTLE_DURATION: Duration = Duration::from_millis(350);

fn settle_easing(duration: Duration) -> Easing {
    Easing::EASE_IN_OUT.with_duration(duration)
}

/// Explicit interpolation between two control states
#[derive(Debug)]
pub struct SettleAnimation {
    duration: Duration,
    animation: Animated<f32>,
    /// State at the moment of release
    from: VolumeState,
    /// Settled state
    to: VolumeState,
    active: bool,
}

impl Default for SettleAnimation {
    fn default() -> Self {
        Self::new(SETTLE_DURATION)
    }
}

impl SettleAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            animation: Animated::transition(0.0, settle_easing(duration)),
            from: VolumeState::default(),
            to: VolumeState::default(),
            active: false,
        }
    }

    /// Begin blending from `from` to `to`
    pub fn start(&mut self, from: VolumeState, to: VolumeState) {
        tracing::debug!(
            "Settling volume {:.3} -> {:.3} over {:?}",
            from.committed_volume,
            to.committed_volume,
            self.duration
        );
        self.from = from;
        self.to = to;
        self.animation = Animated::transition(0.0, settle_easing(self.duration));
        self.animation.update(1.0.into());
        self.active = true;
    }

    /// Eased progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    /// Interpolated state to display, `None` once settled
    pub fn sample(&self) -> Option<VolumeState> {
        self.active.then(|| self.from.lerp(&self.to, self.progress()))
    }

    pub fn is_animating(&self) -> bool {
        self.active
    }

    /// Jump to the settled state
    pub fn finish(&mut self) {
        if self.active {
            tracing::debug!("Settle interrupted at {:.2}", self.progress());
        }
        self.active = false;
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        if !self.active {
            return;
        }
        self.animation.tick(now);
        if !self.animation.is_animating() {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Vector;

    fn released() -> VolumeState {
        VolumeState {
            committed_volume: 0.5,
            drag_offset: Vector::new(0.0, -79.0),
        }
    }

    #[test]
    fn test_idle_has_no_sample() {
        let anim = SettleAnimation::default();
        assert!(!anim.is_animating());
        assert!(anim.sample().is_none());
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn test_sample_stays_between_endpoints() {
        let mut anim = SettleAnimation::default();
        anim.start(released(), VolumeState::new(1.0));
        assert!(anim.is_animating());

        let sample = anim.sample().expect("sample while settling");
        assert!((0.5..=1.0).contains(&sample.committed_volume));
        assert!((-79.0..=0.0).contains(&sample.drag_offset.y));
    }

    #[test]
    fn test_progress_range() {
        let mut anim = SettleAnimation::new(Duration::from_millis(100));
        anim.start(released(), VolumeState::new(1.0));

        let start = Instant::now();
        for step in 0..20 {
            anim.tick(start + Duration::from_millis(step * 10));
            let p = anim.progress();
            assert!((0.0..=1.0).contains(&p), "progress {} out of range", p);
        }
    }

    #[test]
    fn test_ticking_past_duration_settles() {
        let mut anim = SettleAnimation::new(Duration::from_millis(100));
        anim.start(released(), VolumeState::new(1.0));

        let start = Instant::now();
        for step in 0..=100 {
            anim.tick(start + Duration::from_millis(step * 10));
        }
        assert!(!anim.is_animating());
        assert!(anim.sample().is_none());
    }

    #[test]
    fn test_finish_stops_sampling() {
        let mut anim = SettleAnimation::default();
        anim.start(released(), VolumeState::new(1.0));
        anim.finish();
        assert!(!anim.is_animating());
        assert!(anim.sample().is_none());
    }
}
