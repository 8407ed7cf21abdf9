#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod theme;

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("⚡ ReVoice")
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([860.0, 600.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "ReVoice",
        native_options,
        Box::new(|cc| Ok(Box::new(app::ReVoiceApp::new(cc)))),
    )
}
