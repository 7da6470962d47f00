//! Background image handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_backdrop(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::BackdropLoaded(Ok(handle)) => {
                self.volume.set_backdrop(handle.clone());
                Some(Task::none())
            }

            Message::BackdropLoaded(Err(e)) => {
                tracing::warn!("Background unavailable, using solid backdrop: {}", e);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::widget::image;

    use crate::app::{App, Message};
    use crate::features::Settings;
    use crate::ui::widgets::Backdrop;

    #[test]
    fn test_loaded_backdrop_is_rendered() {
        let mut app = App::with_settings(&Settings::default());
        let handle = image::Handle::from_rgba(1, 1, vec![10, 20, 30, 255]);
        let _ = app.update(Message::BackdropLoaded(Ok(handle.clone())));
        assert_eq!(app.volume.render().backdrop, Backdrop::Image(handle));
    }

    #[test]
    fn test_failed_backdrop_keeps_solid_fill() {
        let mut app = App::with_settings(&Settings::default());
        let _ = app.update(Message::BackdropLoaded(Err("missing".to_string())));
        assert!(matches!(app.volume.render().backdrop, Backdrop::Solid(_)));
    }
}
