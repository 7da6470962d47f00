//! Drag gesture and animation frame handlers

use std::time::Instant;

use iced::Task;

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_gesture(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DragChanged(displacement) => {
                self.volume.on_drag_changed(*displacement);
                Some(Task::none())
            }

            Message::DragEnded(displacement) => {
                self.volume.on_drag_ended(*displacement);
                tracing::debug!("Committed volume {:.3}", self.volume.volume());
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.volume.tick(Instant::now());
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Vector;

    use crate::app::{App, Message};
    use crate::features::Settings;

    #[test]
    fn test_drag_and_release_commits_volume() {
        let mut app = App::with_settings(&Settings::default());
        let _ = app.update(Message::DragChanged(Vector::new(0.0, -79.0)));
        assert_eq!(app.volume.volume(), 0.5);
        assert!(!app.has_active_animations());

        let _ = app.update(Message::DragEnded(Vector::new(0.0, -79.0)));
        assert_eq!(app.volume.volume(), 1.0);
        assert!(app.has_active_animations(), "frames needed for spring-back");
    }

    #[test]
    fn test_tick_without_animation_is_harmless() {
        let mut app = App::with_settings(&Settings::default());
        let before = app.volume.render();
        let _ = app.update(Message::AnimationTick);
        assert_eq!(app.volume.render(), before);
    }

    #[test]
    fn test_settings_dampening_reaches_control() {
        let settings = Settings {
            dampening_factor: 2.0,
            ..Default::default()
        };
        let mut app = App::with_settings(&settings);
        // raw 0.5 + 1.5 = 2.0, dampened by 2 to 1.5
        let _ = app.update(Message::DragChanged(Vector::new(0.0, -237.0)));
        let scale_x = app.volume.render().shape.scale_x;
        assert!((scale_x - 1.0 / 1.5f32.sqrt()).abs() < 1e-4);
    }
}
