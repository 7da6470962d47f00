//! Liquid volume control
//!
//! Owns the two pieces of mutable state (committed volume and drag offset),
//! turns drag gestures into state changes and renders the result as a
//! [`VolumeScene`] that the view layer turns into iced elements.
//!
//! Every `render` call recomputes the derived quantities from scratch, so
//! the host only has to call it after each `update`.

use std::time::{Duration, Instant};

use iced::widget::{Space, container, image, stack};
use iced::{Background, Color, ContentFit, Element, Fill, Size, Vector};

use crate::features::volume::sanitize_displacement;
use crate::features::{Geometry, VolumeState};
use crate::ui::animation::SettleAnimation;
use crate::ui::primitives::{FillShape, liquid_fill};
use crate::ui::theme;

/// What fills the viewport behind the control
#[derive(Debug, Clone, PartialEq)]
pub enum Backdrop {
    /// Pre-blurred background image
    Image(image::Handle),
    /// Background image not available (yet)
    Solid(Color),
}

/// Render output of the control
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeScene {
    pub backdrop: Backdrop,
    pub shape: FillShape,
    /// Volume displayed by the fill, within [0, 1]
    pub clamped_volume: f32,
}

/// Interactive liquid volume control
#[derive(Debug)]
pub struct VolumeWidget {
    geometry: Geometry,
    state: VolumeState,
    settle: SettleAnimation,
    backdrop: Option<image::Handle>,
}

impl Default for VolumeWidget {
    fn default() -> Self {
        Self::new(Geometry::default(), crate::ui::animation::SETTLE_DURATION)
    }
}

impl VolumeWidget {
    pub fn new(geometry: Geometry, settle_duration: Duration) -> Self {
        Self {
            geometry,
            state: VolumeState::default(),
            settle: SettleAnimation::new(settle_duration),
            backdrop: None,
        }
    }

    /// Committed volume (0.0 to 1.0)
    pub fn volume(&self) -> f32 {
        self.state.committed_volume
    }

    /// Owned state, without any in-flight animation applied
    #[cfg(test)]
    pub fn state(&self) -> VolumeState {
        self.state
    }

    pub fn set_backdrop(&mut self, handle: image::Handle) {
        self.backdrop = Some(handle);
    }

    /// Track the pointer directly, no animation
    pub fn on_drag_changed(&mut self, displacement: Vector) {
        // A new gesture takes over from an unfinished spring-back
        self.settle.finish();
        self.state.drag_offset = sanitize_displacement(displacement);
    }

    /// Commit the clamped volume and spring back to rest
    pub fn on_drag_ended(&mut self, displacement: Vector) {
        self.settle.finish();

        let released = VolumeState {
            committed_volume: self.state.committed_volume,
            drag_offset: sanitize_displacement(displacement),
        };
        let settled = VolumeState::new(released.clamped_volume(&self.geometry));

        tracing::info!(
            "Volume {:.3} -> {:.3}",
            self.state.committed_volume,
            settled.committed_volume
        );

        self.state = settled;
        self.settle.start(released, settled);
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_animating()
    }

    /// Tick the animation forward in time
    pub fn tick(&mut self, now: Instant) {
        self.settle.tick(now);
    }

    /// State as currently shown, mid-animation values included
    fn displayed(&self) -> VolumeState {
        self.settle.sample().unwrap_or(self.state)
    }

    pub fn render(&self) -> VolumeScene {
        let shown = self.displayed();
        let g = &self.geometry;
        let clamped = shown.clamped_volume(g);
        let deformation = shown.deformation(g);

        let shape = FillShape {
            frame: Size::new(
                g.width * deformation.scale_x,
                g.height * deformation.scale_y,
            ),
            fill_height: g.height * deformation.scale_y * clamped,
            corner_radius: g.corner_radius,
            scale_x: deformation.scale_x,
            scale_y: deformation.scale_y,
            offset_y: deformation.vertical_offset,
            track_color: theme::TRACK,
            fill_color: theme::FILL,
        };

        let backdrop = match &self.backdrop {
            Some(handle) => Backdrop::Image(handle.clone()),
            None => Backdrop::Solid(theme::BACKDROP_FALLBACK),
        };

        VolumeScene {
            backdrop,
            shape,
            clamped_volume: clamped,
        }
    }

    /// Build the element tree for the current state
    pub fn view<'a, Message: 'a>(
        &self,
        on_drag: impl Fn(Vector) -> Message + 'a,
        on_release: impl Fn(Vector) -> Message + 'a,
    ) -> Element<'a, Message> {
        let scene = self.render();

        let backdrop: Element<'a, Message> = match scene.backdrop {
            Backdrop::Image(handle) => image(handle)
                .width(Fill)
                .height(Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            Backdrop::Solid(color) => container(Space::new())
                .width(Fill)
                .height(Fill)
                .style(move |_| container::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                })
                .into(),
        };

        stack![backdrop, liquid_fill(scene.shape, on_drag, on_release)]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
