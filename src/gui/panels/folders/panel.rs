use eframe::egui;
use std::sync::mpsc::Sender;

use super::state::FoldersPanelState;
use super::ui;
use crate::app_config::AppConfig;
use crate::gui::state::CommandMessage;
use crate::gui::widgets::StatusDisplay;
use crate::path_defs::PathDefs;

pub struct FoldersPanel {
    state: FoldersPanelState,
}

impl FoldersPanel {
    pub fn from_config(config: &AppConfig, defs: &PathDefs) -> Self {
        Self {
            state: FoldersPanelState::from_config(&config.folders, defs),
        }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        defs: &PathDefs,
        sender: Option<&Sender<CommandMessage>>,
    ) {
        ui::render_panel(ui, &mut self.state, defs, sender);
    }

    pub fn apply_to_config(&mut self, config: &mut AppConfig) {
        self.state.apply_to(&mut config.folders);
    }

    pub fn reset_from_config(&mut self, config: &AppConfig, defs: &PathDefs) {
        self.state.reset_from(&config.folders, defs);
    }

    pub fn status(&mut self) -> &mut StatusDisplay {
        &mut self.state.status
    }
}
