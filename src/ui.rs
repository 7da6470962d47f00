//! UI module for the liquid volume control
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): The stateful volume control
//! - **Effects** (`effects`): Background image processing
//! - **Animation** (`animation`): Host-ticked transitions

pub mod animation;
pub mod effects;
pub mod primitives;
pub mod theme;
pub mod widgets;
