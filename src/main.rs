//! Liquid Volume - a squishy volume control
//! Built with iced; drag the liquid up or down, overscroll to stretch it

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(390.0, 844.0))
        .antialiasing(true)
        .run()
}
