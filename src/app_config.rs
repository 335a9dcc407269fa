use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::folders::FolderId;
use crate::path_defs::PathDefs;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to read config file: {}", source))]
    FileRead { source: std::io::Error },
    #[snafu(display("failed to write config file: {}", source))]
    FileWrite { source: std::io::Error },
    #[snafu(display("failed to create config directory: {}", source))]
    DirCreation { source: std::io::Error },
    #[snafu(display("serde failed to serialize: {}", source))]
    Serialization { source: serde_json::Error },
    #[snafu(display("serde failed to deserialize: {}", source))]
    Deserialization { source: serde_json::Error },
    #[snafu(display("config version {} is newer than supported version {}", found, supported))]
    VersionTooNew { found: u32, supported: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FolderEntry {
    path: PathBuf,
    use_default: bool,
}

/// Per-role folder settings: an override path plus whether the role tracks
/// its computed default instead. Roles without an entry are default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderConfig {
    #[serde(default)]
    entries: HashMap<FolderId, FolderEntry>,
}

impl FolderConfig {
    pub fn is_default(&self, folder: FolderId) -> bool {
        self.entries
            .get(&folder)
            .map(|entry| entry.use_default)
            .unwrap_or(true)
    }

    /// Current value for a role: the stored override, or the resolver's
    /// default while the role is flagged default (or has never been set).
    pub fn get(&self, folder: FolderId, defs: &PathDefs) -> PathBuf {
        match self.entries.get(&folder) {
            Some(entry) if !entry.use_default => entry.path.clone(),
            _ => defs.get(folder),
        }
    }

    pub fn set(&mut self, folder: FolderId, path: PathBuf, use_default: bool) {
        self.entries.insert(folder, FolderEntry { path, use_default });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    version: u32,
    pub window_size: [f32; 2],
    pub saved_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub folders: FolderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            window_size: [640.0, 560.0],
            saved_at: None,
            folders: FolderConfig::default(),
        }
    }
}

impl AppConfig {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("alcove")
            .join("config.json")
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).context(FileReadSnafu)?;
        let config: AppConfig = serde_json::from_str(&contents).context(DeserializationSnafu)?;

        if config.version > Self::CURRENT_VERSION {
            return Err(Error::VersionTooNew {
                found: config.version,
                supported: Self::CURRENT_VERSION,
            });
        }
        Ok(config)
    }

    pub fn save(&mut self) -> Result<(), Error> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&mut self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(DirCreationSnafu)?;
        }
        self.saved_at = Some(chrono::Utc::now());

        let contents = serde_json::to_string_pretty(self).context(SerializationSnafu)?;
        fs::write(path, contents).context(FileWriteSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_default_until_set() {
        let config = FolderConfig::default();
        for folder in FolderId::ALL {
            assert!(config.is_default(folder));
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let defs = PathDefs::new("/opt/alcove".into());
        let mut config = FolderConfig::default();

        config.set(FolderId::Logs, "/var/log/alcove".into(), false);
        assert!(!config.is_default(FolderId::Logs));
        assert_eq!(config.get(FolderId::Logs, &defs), PathBuf::from("/var/log/alcove"));

        // Flipping back to default keeps the stored path but stops serving it.
        config.set(FolderId::Logs, "/var/log/alcove".into(), true);
        assert!(config.is_default(FolderId::Logs));
        assert_eq!(config.get(FolderId::Logs, &defs), defs.get(FolderId::Logs));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.window_size = [800.0, 600.0];
        config.folders.set(FolderId::Bios, "/data/bios".into(), false);
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.window_size, [800.0, 600.0]);
        assert!(loaded.saved_at.is_some());
        assert!(!loaded.folders.is_default(FolderId::Bios));
        assert!(loaded.folders.is_default(FolderId::Cheats));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("nope.json")).unwrap();
        assert!(loaded.saved_at.is_none());
        assert!(loaded.folders.is_default(FolderId::Savestates));
    }

    #[test]
    fn newer_config_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.version = AppConfig::CURRENT_VERSION + 1;
        config.save_to(&path).unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(Error::VersionTooNew { .. })
        ));
    }
}
