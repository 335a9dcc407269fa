use std::path::{Path, PathBuf};

use crate::folders::FolderId;

/// Computes the default directory for each folder role. Constructed once and
/// passed by handle to whatever needs a default resolved.
#[derive(Debug, Clone)]
pub struct PathDefs {
    base: PathBuf,
}

impl PathDefs {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Roots the defaults in the platform data dir, falling back to a
    /// relative directory when the platform reports none.
    pub fn discover() -> Self {
        let base = dirs::data_dir()
            .map(|dir| dir.join("alcove"))
            .unwrap_or_else(|| PathBuf::from("alcove"));
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn get(&self, folder: FolderId) -> PathBuf {
        self.base.join(folder.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::PathDefs;
    use crate::folders::FolderId;

    #[test]
    fn role_dirs_hang_off_base() {
        let defs = PathDefs::new("/opt/alcove".into());
        assert_eq!(defs.get(FolderId::Bios), std::path::PathBuf::from("/opt/alcove/bios"));
        assert_eq!(
            defs.get(FolderId::MemoryCards),
            std::path::PathBuf::from("/opt/alcove/memcards")
        );
    }
}
