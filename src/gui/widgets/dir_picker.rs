use eframe::egui;
use std::path::{Path, PathBuf};

use crate::app_config::FolderConfig;
use crate::folders::FolderId;
use crate::path_defs::PathDefs;
use crate::paths;

/// Directory selection control for one folder role: a path input with a
/// folder-picker button, a "use default" checkbox that locks the input to
/// the resolver's output, and a button opening the folder in the system
/// file browser. Reads its initial state from the folder config at
/// construction and writes back only through `apply`.
pub struct DirPicker {
    folder: FolderId,
    label: String,
    dialog_title: String,
    path: PathBuf,
    use_default: bool,
    static_desc: Option<String>,
}

impl DirPicker {
    pub fn new(
        folder: FolderId,
        label: &str,
        dialog_title: &str,
        config: &FolderConfig,
        defs: &PathDefs,
    ) -> Self {
        let use_default = config.is_default(folder);
        let mut path = paths::normalize(&config.get(folder, defs));

        // A stale entry can name a regular file. Fall back to the role's
        // default so the control always starts on a usable directory.
        if path.is_file() {
            path = paths::normalize(&defs.get(folder));
        }

        if !path.is_dir() {
            // Best effort. The control still shows the path if this fails.
            std::fs::create_dir_all(&path).ok();
        }

        Self {
            folder,
            label: label.to_string(),
            dialog_title: dialog_title.to_string(),
            path,
            use_default,
            static_desc: None,
        }
    }

    pub fn with_static_desc(mut self, desc: impl Into<String>) -> Self {
        self.static_desc = Some(desc.into());
        self
    }

    pub fn folder(&self) -> FolderId {
        self.folder
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn uses_default(&self) -> bool {
        self.use_default
    }

    pub fn is_editable(&self) -> bool {
        !self.use_default
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }

    /// Checkbox handler. Checking locks the input and overwrites the
    /// displayed value with the resolver's current default; unchecking
    /// unlocks the input and leaves the value untouched.
    pub fn set_use_default(&mut self, checked: bool, defs: &PathDefs) {
        self.use_default = checked;
        if checked {
            self.path = paths::normalize(&defs.get(self.folder));
        }
    }

    /// Restores the config's current value and flag for this role.
    pub fn reset(&mut self, config: &FolderConfig, defs: &PathDefs) {
        self.use_default = config.is_default(self.folder);
        self.path = paths::normalize(&config.get(self.folder, defs));
    }

    /// Pushes the displayed path and checkbox state into the config.
    pub fn apply(&self, config: &mut FolderConfig) {
        config.set(self.folder, self.path.clone(), self.use_default);
    }

    pub fn open_in_file_browser(&self) -> std::io::Result<()> {
        open::that(&self.path)
    }

    // Returns true if the displayed state changed this frame.
    pub fn show(&mut self, ui: &mut egui::Ui, defs: &PathDefs) -> bool {
        let mut changed = false;

        if let Some(desc) = &self.static_desc {
            ui.label(desc);
            ui.add_space(4.0);
        }

        ui.group(|ui| {
            ui.label(egui::RichText::new(self.label.as_str()).strong());
            ui.horizontal(|ui| {
                let mut text = self.path.to_string_lossy().to_string();
                let edit = ui.add_enabled(
                    self.is_editable(),
                    egui::TextEdit::singleline(&mut text).desired_width(380.0),
                );
                if edit.changed() {
                    self.path = PathBuf::from(text);
                    changed = true;
                }

                let browse = ui.add_enabled(self.is_editable(), egui::Button::new("Browse"));
                if browse.clicked() {
                    if let Some(picked) = rfd::FileDialog::new()
                        .set_title(&self.dialog_title)
                        .set_directory(&self.path)
                        .pick_folder()
                    {
                        self.path = picked;
                        changed = true;
                    }
                }
            });

            ui.horizontal(|ui| {
                let mut use_default = self.use_default;
                let check = ui
                    .checkbox(&mut use_default, "Use default setting")
                    .on_hover_text(
                        "When checked this folder tracks the computed default location.",
                    );
                if check.changed() {
                    self.set_use_default(use_default, defs);
                    changed = true;
                }

                if ui
                    .button("Open in file browser")
                    .on_hover_text("Open this folder in the system file browser.")
                    .clicked()
                {
                    // Best effort, matching the rest of the control's
                    // filesystem interactions.
                    self.open_in_file_browser().ok();
                }
            });
        });

        changed
    }
}
