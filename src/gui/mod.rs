pub mod panels;
pub mod state;
pub mod widgets;

#[cfg(test)]
mod tests;

use eframe::egui;

use crate::app_config::AppConfig;
use crate::gui::panels::folders::FoldersPanel;
use crate::gui::state::{CommandChannels, CommandMessage};
use crate::path_defs::PathDefs;

pub struct AlcoveGui {
    config: AppConfig,
    defs: PathDefs,
    folders_panel: FoldersPanel,
    channels: CommandChannels,
}

impl AlcoveGui {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            eprintln!("Failed to load config: {}", e);
            AppConfig::default()
        });
        let defs = PathDefs::discover();
        let folders_panel = FoldersPanel::from_config(&config, &defs);

        Self {
            config,
            defs,
            folders_panel,
            channels: CommandChannels::default(),
        }
    }
}

impl eframe::App for AlcoveGui {
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        // Window geometry only. Folder edits reach the config solely
        // through the panel's Apply button.
        if let Err(e) = self.config.save() {
            eprintln!("Failed to save config: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let size = ctx.screen_rect().size();
        self.config.window_size = [size.x, size.y];

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Alcove");
                ui.separator();
                ui.label("Folder Settings");
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(AppConfig::config_path().display().to_string());
                if let Some(saved_at) = self.config.saved_at {
                    ui.separator();
                    ui.label(format!("Last applied {}", saved_at.format("%Y-%m-%d %H:%M")));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.folders_panel
                .show(ui, &self.defs, Some(&self.channels.sender));

            while let Ok(msg) = self.channels.receiver.try_recv() {
                match msg {
                    CommandMessage::ApplyFolders => {
                        self.folders_panel.apply_to_config(&mut self.config);
                        match self.config.save() {
                            Ok(()) => self.folders_panel.status().set_info("Settings applied"),
                            Err(e) => self
                                .folders_panel
                                .status()
                                .set_error(format!("Failed to save config: {}", e)),
                        }
                    }
                    CommandMessage::ResetFolders => {
                        self.folders_panel.reset_from_config(&self.config, &self.defs);
                        self.folders_panel.status().clear();
                    }
                }
            }
        });
    }
}
