#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;


use iced::Size;

fn main() -> iced::Result {
    env_logger::init();

    log::info!(
        "[MAIN] Starting {}",
        global_constants::APPLICATION_NAME
    );

    iced::application(
        app::SearchApp::build,
        app::SearchApp::handle_update,
        app::SearchApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .window_size(Size::new(
        global_constants::MAIN_WINDOW_WIDTH,
        global_constants::MAIN_WINDOW_HEIGHT,
    ))
    .run()
}
