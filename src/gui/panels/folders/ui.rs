use eframe::egui;
use std::sync::mpsc::Sender;

use super::state::FoldersPanelState;
use crate::gui::state::CommandMessage;
use crate::path_defs::PathDefs;

pub fn render_panel(
    ui: &mut egui::Ui,
    state: &mut FoldersPanelState,
    defs: &PathDefs,
    sender: Option<&Sender<CommandMessage>>,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading("Folders");
            state.status.show(ui);
            ui.add_space(8.0);

            for picker in &mut state.pickers {
                if picker.show(ui, defs) {
                    state.dirty = true;
                }
                ui.add_space(8.0);
            }

            render_apply_row(ui, state, sender);
        });
}

fn render_apply_row(
    ui: &mut egui::Ui,
    state: &mut FoldersPanelState,
    sender: Option<&Sender<CommandMessage>>,
) {
    ui.separator();
    ui.add_space(4.0);

    if state.dirty {
        ui.label("Unapplied changes");
        ui.add_space(4.0);
    }

    ui.horizontal(|ui| {
        if ui.button("Apply").clicked() {
            if let Some(sender) = sender {
                sender.send(CommandMessage::ApplyFolders).ok();
            }
        }
        ui.add_space(8.0);
        if ui.button("Reset").clicked() {
            if let Some(sender) = sender {
                sender.send(CommandMessage::ResetFolders).ok();
            }
        }
    });
}
