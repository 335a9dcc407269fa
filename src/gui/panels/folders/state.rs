use crate::app_config::FolderConfig;
use crate::folders::FolderId;
use crate::gui::widgets::{DirPicker, StatusDisplay};
use crate::path_defs::PathDefs;

pub struct FoldersPanelState {
    pub pickers: Vec<DirPicker>,
    pub status: StatusDisplay,
    pub dirty: bool,
}

impl FoldersPanelState {
    pub fn from_config(config: &FolderConfig, defs: &PathDefs) -> Self {
        let pickers = FolderId::ALL
            .iter()
            .map(|&folder| {
                let dialog_title = format!("Select {} Directory", folder.label());
                let picker = DirPicker::new(folder, folder.label(), &dialog_title, config, defs);
                match folder {
                    FolderId::Bios => picker.with_static_desc(
                        "Folder scanned for BIOS images. A valid image must be \
                         present before anything can run.",
                    ),
                    FolderId::MemoryCards => picker.with_static_desc(
                        "Memory card files live here. Moving this folder does not \
                         move existing cards.",
                    ),
                    _ => picker,
                }
            })
            .collect();

        Self {
            pickers,
            status: StatusDisplay::default(),
            dirty: false,
        }
    }

    pub fn apply_to(&mut self, config: &mut FolderConfig) {
        for picker in &self.pickers {
            picker.apply(config);
        }
        self.dirty = false;
    }

    pub fn reset_from(&mut self, config: &FolderConfig, defs: &PathDefs) {
        for picker in &mut self.pickers {
            picker.reset(config, defs);
        }
        self.dirty = false;
    }
}
