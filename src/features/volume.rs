//! Volume interaction model
//!
//! Pure math behind the liquid volume control: the rubber-band dampening
//! applied when a drag leaves the valid range, and the squash/stretch
//! deformation derived from it. Nothing in here knows about iced widgets.

use iced::Vector;

/// Default dampening factor applied to overscroll travel
pub const DEFAULT_DAMPENING_FACTOR: f32 = 10.0;

/// Fixed geometry of the control in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Reference width of the container
    pub width: f32,
    /// Reference height of the container, also the drag distance for a full sweep
    pub height: f32,
    /// Corner radius of the clip shape
    pub corner_radius: f32,
    /// How strongly overscroll is attenuated (must be > 1)
    pub dampening_factor: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 72.0,
            height: 158.0,
            corner_radius: 22.0,
            dampening_factor: DEFAULT_DAMPENING_FACTOR,
        }
    }
}

impl Geometry {
    /// Override the dampening factor, ignoring values that would not dampen
    pub fn with_dampening(mut self, factor: f32) -> Self {
        if factor.is_finite() && factor > 1.0 {
            self.dampening_factor = factor;
        } else {
            tracing::warn!(
                "Ignoring dampening factor {}, using {}",
                factor,
                DEFAULT_DAMPENING_FACTOR
            );
            self.dampening_factor = DEFAULT_DAMPENING_FACTOR;
        }
        self
    }
}

/// Compress travel outside [0, 1] by `factor`, identity inside
pub fn dampen(value: f32, factor: f32) -> f32 {
    if value < 0.0 {
        value / factor
    } else if value > 1.0 {
        1.0 + (value - 1.0) / factor
    } else {
        value
    }
}

/// Squash/stretch applied to the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deformation {
    pub scale_x: f32,
    pub scale_y: f32,
    /// Keeps the edge nearest the overscroll anchored
    pub vertical_offset: f32,
}

impl Deformation {
    pub const NONE: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        vertical_offset: 0.0,
    };

    /// Derive the deformation for a dampened (unclamped) volume
    ///
    /// The branches keep the square root argument >= 1, so this is total
    /// for every finite input.
    pub fn for_volume(current: f32, height: f32) -> Self {
        if current > 1.0 {
            let scale_x = 1.0 / current.sqrt();
            let scale_y = 1.0 / scale_x;
            Self {
                scale_x,
                scale_y,
                vertical_offset: -height * (scale_y - 1.0),
            }
        } else if current < 0.0 {
            let scale_x = 1.0 / (1.0 - current).sqrt();
            let scale_y = 1.0 / scale_x;
            Self {
                scale_x,
                scale_y,
                vertical_offset: height * (scale_y - 1.0),
            }
        } else {
            Self::NONE
        }
    }
}

/// The two owned fields of the control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeState {
    /// Last settled level, always within [0, 1]
    pub committed_volume: f32,
    /// In-progress drag displacement, only `y` is used
    pub drag_offset: Vector,
}

impl Default for VolumeState {
    fn default() -> Self {
        Self {
            committed_volume: 0.5,
            drag_offset: Vector::ZERO,
        }
    }
}

impl VolumeState {
    pub fn new(committed_volume: f32) -> Self {
        Self {
            committed_volume: committed_volume.clamp(0.0, 1.0),
            drag_offset: Vector::ZERO,
        }
    }

    /// Dampened volume the current drag asks for, may leave [0, 1]
    pub fn raw_volume(&self, geometry: &Geometry) -> f32 {
        dampen(
            self.committed_volume - self.drag_offset.y / geometry.height,
            geometry.dampening_factor,
        )
    }

    /// Volume shown by the fill, always within [0, 1]
    pub fn clamped_volume(&self, geometry: &Geometry) -> f32 {
        self.raw_volume(geometry).clamp(0.0, 1.0)
    }

    pub fn deformation(&self, geometry: &Geometry) -> Deformation {
        Deformation::for_volume(self.raw_volume(geometry), geometry.height)
    }

    /// Linear blend between two states, `t` in [0, 1]
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            committed_volume: self.committed_volume
                + (to.committed_volume - self.committed_volume) * t,
            drag_offset: self.drag_offset + (to.drag_offset - self.drag_offset) * t,
        }
    }
}

/// Replace non-finite components with zero
pub fn sanitize_displacement(displacement: Vector) -> Vector {
    if displacement.x.is_finite() && displacement.y.is_finite() {
        displacement
    } else {
        tracing::warn!("Dropping non-finite drag displacement {:?}", displacement);
        Vector::ZERO
    }
}
