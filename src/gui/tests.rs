use std::fs;
use std::path::PathBuf;

use crate::app_config::FolderConfig;
use crate::folders::FolderId;
use crate::gui::widgets::DirPicker;
use crate::path_defs::PathDefs;
use crate::paths;

fn test_defs() -> (tempfile::TempDir, PathDefs) {
    let dir = tempfile::tempdir().unwrap();
    let defs = PathDefs::new(dir.path().join("defaults"));
    (dir, defs)
}

fn picker_for(folder: FolderId, config: &FolderConfig, defs: &PathDefs) -> DirPicker {
    DirPicker::new(folder, folder.label(), "Select Directory", config, defs)
}

#[test]
fn default_role_shows_resolver_path_and_is_locked() {
    let (_dir, defs) = test_defs();
    let config = FolderConfig::default();

    let picker = picker_for(FolderId::Savestates, &config, &defs);

    assert!(picker.uses_default());
    assert!(!picker.is_editable());
    assert_eq!(picker.path(), paths::normalize(&defs.get(FolderId::Savestates)));
}

#[test]
fn override_role_shows_normalized_override() {
    let (dir, defs) = test_defs();
    let mut config = FolderConfig::default();
    let custom = dir.path().join("cards").join(".").join("extra").join("..").join("memcards");
    config.set(FolderId::MemoryCards, custom, false);

    let picker = picker_for(FolderId::MemoryCards, &config, &defs);

    assert!(picker.is_editable());
    assert_eq!(
        picker.path(),
        paths::normalize(&dir.path().join("cards").join("memcards"))
    );
}

#[test]
fn checking_use_default_overwrites_displayed_path() {
    let (dir, defs) = test_defs();
    let mut config = FolderConfig::default();
    config.set(FolderId::Logs, dir.path().join("custom-logs"), false);

    let mut picker = picker_for(FolderId::Logs, &config, &defs);
    picker.set_use_default(true, &defs);

    assert!(!picker.is_editable());
    assert_eq!(picker.path(), paths::normalize(&defs.get(FolderId::Logs)));
}

#[test]
fn unchecking_keeps_displayed_path() {
    let (_dir, defs) = test_defs();
    let config = FolderConfig::default();

    let mut picker = picker_for(FolderId::Snapshots, &config, &defs);
    let shown = picker.path().to_path_buf();
    picker.set_use_default(false, &defs);

    assert!(picker.is_editable());
    assert_eq!(picker.path(), shown);
}

#[test]
fn apply_writes_last_displayed_state_only() {
    let (dir, defs) = test_defs();
    let mut config = FolderConfig::default();
    config.set(FolderId::Cheats, dir.path().join("first"), false);

    let mut picker = picker_for(FolderId::Cheats, &config, &defs);

    // Intermediate states must not leak into the store.
    picker.set_use_default(true, &defs);
    picker.set_use_default(false, &defs);
    picker.set_path(dir.path().join("second"));
    picker.apply(&mut config);

    assert!(!config.is_default(FolderId::Cheats));
    assert_eq!(config.get(FolderId::Cheats, &defs), dir.path().join("second"));
}

#[test]
fn reset_restores_applied_value() {
    let (dir, defs) = test_defs();
    let mut config = FolderConfig::default();
    config.set(FolderId::Bios, dir.path().join("bios-here"), false);

    let mut picker = picker_for(FolderId::Bios, &config, &defs);
    picker.set_path(PathBuf::from("/somewhere/uncommitted"));
    picker.set_use_default(true, &defs);
    picker.reset(&config, &defs);

    assert!(picker.is_editable());
    assert_eq!(picker.path(), paths::normalize(&dir.path().join("bios-here")));
}

#[test]
fn construction_creates_missing_directory() {
    let (_dir, defs) = test_defs();
    let config = FolderConfig::default();

    let picker = picker_for(FolderId::Bios, &config, &defs);

    assert!(picker.path().is_dir());
}

#[test]
fn file_collision_falls_back_to_default() {
    let (dir, defs) = test_defs();
    let mut config = FolderConfig::default();

    let collision = dir.path().join("not-a-dir");
    fs::write(&collision, b"regular file").unwrap();
    config.set(FolderId::Savestates, collision, false);

    let picker = picker_for(FolderId::Savestates, &config, &defs);

    assert_eq!(picker.path(), paths::normalize(&defs.get(FolderId::Savestates)));
    assert!(picker.path().is_dir());
}
