//! Application state

use crate::features::Settings;
use crate::ui::widgets::VolumeWidget;

/// Root application state
#[derive(Debug)]
pub struct App {
    pub volume: VolumeWidget,
}

impl App {
    /// Build state from already loaded settings
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            volume: VolumeWidget::new(settings.geometry(), settings.settle_duration()),
        }
    }

    /// Whether the frame subscription must run
    pub fn has_active_animations(&self) -> bool {
        self.volume.is_animating()
    }
}
