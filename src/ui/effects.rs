//! Visual effects
//!
//! - Pre-blurred background image for the control's backdrop

pub mod backdrop;

pub use backdrop::load_backdrop;
