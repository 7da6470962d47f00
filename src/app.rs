//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::Task;

use crate::features::Settings;
use crate::ui::effects;
pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        write_default_settings(&settings);

        let background = settings.background();
        let blur = settings.background_blur;
        tracing::info!("Loading background from {}", background.display());

        let app = Self::with_settings(&settings);
        let load_backdrop = Task::perform(effects::load_backdrop(background, blur), |result| {
            Message::BackdropLoaded(result.map_err(|e| format!("{:#}", e)))
        });

        (app, load_backdrop)
    }

    pub fn title(&self) -> String {
        // Follows the finger, not just the committed level
        format!("Volume - {:.0}%", self.volume.render().clamped_volume * 100.0)
    }

    /// Frame subscription, only while the control springs back
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

/// Leave an editable settings file behind on first launch
fn write_default_settings(settings: &Settings) {
    let Some(path) = Settings::file_path() else {
        return;
    };
    if path.exists() {
        return;
    }
    match settings.save() {
        Ok(()) => tracing::info!("Wrote default settings to {}", path.display()),
        Err(e) => tracing::warn!("Could not write default settings: {}", e),
    }
}
