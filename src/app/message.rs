//! Application messages

use iced::Vector;
use iced::widget::image;

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Gesture ============
    /// Pointer moved while dragging the control (displacement from press)
    DragChanged(Vector),
    /// Pointer released (final displacement from press)
    DragEnded(Vector),

    // ============ Frame ============
    /// Animation frame while the control springs back
    AnimationTick,

    // ============ Assets ============
    /// Background image decoded and blurred, or the reason it failed
    BackdropLoaded(Result<image::Handle, String>),
}

// Manual Debug implementation to keep high-frequency and image messages short
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DragChanged(v) => write!(f, "DragChanged({:.1}, {:.1})", v.x, v.y),
            Self::DragEnded(v) => write!(f, "DragEnded({:.1}, {:.1})", v.x, v.y),
            Self::AnimationTick => write!(f, "AnimationTick"),
            Self::BackdropLoaded(Ok(_)) => write!(f, "BackdropLoaded(Ok)"),
            Self::BackdropLoaded(Err(e)) => write!(f, "BackdropLoaded(Err({}))", e),
        }
    }
}
