use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifies one configurable directory purpose. Each role either tracks
/// its computed default location or carries a user override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FolderId {
    Bios,
    Savestates,
    MemoryCards,
    Snapshots,
    Logs,
    Cheats,
}

impl FolderId {
    pub const ALL: [FolderId; 6] = [
        FolderId::Bios,
        FolderId::Savestates,
        FolderId::MemoryCards,
        FolderId::Snapshots,
        FolderId::Logs,
        FolderId::Cheats,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FolderId::Bios => "BIOS",
            FolderId::Savestates => "Savestates",
            FolderId::MemoryCards => "Memory Cards",
            FolderId::Snapshots => "Snapshots",
            FolderId::Logs => "Logs",
            FolderId::Cheats => "Cheats",
        }
    }

    // Directory name used under the resolver's base path.
    pub fn dir_name(&self) -> &'static str {
        match self {
            FolderId::Bios => "bios",
            FolderId::Savestates => "sstates",
            FolderId::MemoryCards => "memcards",
            FolderId::Snapshots => "snaps",
            FolderId::Logs => "logs",
            FolderId::Cheats => "cheats",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FolderId;
    use std::collections::HashSet;

    #[test]
    fn dir_names_are_distinct() {
        let names: HashSet<_> = FolderId::ALL.iter().map(|f| f.dir_name()).collect();
        assert_eq!(names.len(), FolderId::ALL.len());
    }
}
