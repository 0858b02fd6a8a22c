#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::Path;

use kaleido_doodle::{KaleidoApp, KaleidoConfig, config::CONFIG_FILE_NAME};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = KaleidoConfig::load_or_default(Path::new(CONFIG_FILE_NAME));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title("Kaleido Doodle"),
        ..Default::default()
    };
    eframe::run_native(
        "kaleido_doodle",
        native_options,
        Box::new(|cc| Ok(Box::new(KaleidoApp::new(cc, config)))),
    )
}
