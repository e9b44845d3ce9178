use aquakids_therapy_egui::config::AppConfig;
use aquakids_therapy_egui::AquaKidsApp;
use eframe::egui;
use log::info;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging (filter with RUST_LOG)
    env_logger::init();
    info!("Starting AquaKids Therapy egui application");

    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size)
            .with_min_inner_size(config.window.min_inner_size)
            .with_title(config.window.title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let app = AquaKidsApp::new(&config);
            info!("Successfully initialized AquaKids Therapy app");
            Ok(Box::new(app))
        }),
    )
}
