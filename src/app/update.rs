//! Message update handlers - thin dispatcher delegating to submodules

mod backdrop;
mod gesture;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_gesture(&message) {
            return task;
        }
        if let Some(task) = self.handle_backdrop(&message) {
            return task;
        }

        Task::none()
    }
}
