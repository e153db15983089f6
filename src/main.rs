mod app;
mod color;
mod data;
mod export;
mod format;
mod metrics;
mod project;
mod state;
mod ui;

use app::AerodashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Aircraft Interiors Market Dashboard")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Aircraft Interiors Market Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(AerodashApp::new(cc)))),
    )
}
