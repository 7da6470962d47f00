//! Colors for the liquid volume control
//!
//! A fixed palette: a smoky dark track with a milky liquid fill, drawn over
//! whatever the background image provides.

use iced::{Color, color};

/// Track behind the liquid (black at 50%)
///
/// Drawn flat rather than frosted; the backdrop under it is already blurred.
pub const TRACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

/// Liquid fill (white at 70%)
pub const FILL: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.7);

/// Shown when the background image is unavailable
pub const BACKDROP_FALLBACK: Color = color!(0x1a1a1a);

/// Subtle rim so the track stays visible on dark backgrounds
pub const TRACK_RIM: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.08);
