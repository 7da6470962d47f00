//! Feature modules - interaction logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod settings;
pub mod volume;

pub use settings::Settings;
pub use volume::{Geometry, VolumeState};
