mod app;
mod charts;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::LaunchDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path on the command line, loaded before the first
    // frame (e.g. `launch-dash spacex_launch_dash.csv`).
    let initial_file: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 850.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Dash – Rocket Launch Records",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(initial_file)))),
    )
}
