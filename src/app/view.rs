//! Application view rendering

use iced::Element;

use super::App;
use super::message::Message;

impl App {
    /// Build the view; the control recomputes everything from its state
    pub fn view(&self) -> Element<'_, Message> {
        self.volume.view(Message::DragChanged, Message::DragEnded)
    }
}
