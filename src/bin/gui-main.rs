use eframe::egui::ViewportBuilder;

use alcove::app_config::AppConfig;
use alcove::gui::AlcoveGui;

fn main() -> Result<(), eframe::Error> {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}", e);
        AppConfig::default()
    });
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Alcove",
        options,
        Box::new(|cc| Ok(Box::new(AlcoveGui::new(cc)))),
    )
}
