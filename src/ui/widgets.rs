//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not depend on `crate::app` directly.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Widgets** (this module): Stateful controls that render through primitives

mod volume_widget;

pub use volume_widget::{Backdrop, VolumeWidget};
