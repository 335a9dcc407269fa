use clap::{Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;

pub mod app_config;
pub mod folders;
pub mod gui;
pub mod path_defs;
pub mod paths;

use app_config::AppConfig;
use folders::FolderId;
use path_defs::PathDefs;

#[derive(Debug)]
pub enum AlcoveError {
    Config(app_config::Error),
    Explore(PathBuf, std::io::Error),
}

impl fmt::Display for AlcoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Config error: {}", e),
            Self::Explore(path, e) => {
                write!(f, "Failed to open {} in the file browser: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for AlcoveError {}

impl From<app_config::Error> for AlcoveError {
    fn from(error: app_config::Error) -> Self {
        AlcoveError::Config(error)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every folder role with its current directory
    List,
    /// Point a folder role at a custom directory
    Set {
        folder: FolderId,

        path: PathBuf,
    },
    /// Revert a folder role to its computed default
    UseDefault {
        folder: FolderId,
    },
    /// Open a folder role's directory in the system file browser
    Open {
        folder: FolderId,
    },
}

#[derive(Parser)]
pub struct Args {
    #[clap(subcommand)]
    command: Commands,
}

pub fn run(args: Args) -> Result<(), AlcoveError> {
    let mut config = AppConfig::load()?;
    let defs = PathDefs::discover();

    match args.command {
        Commands::List => {
            for folder in FolderId::ALL {
                let marker = if config.folders.is_default(folder) {
                    "(default)"
                } else {
                    ""
                };
                println!(
                    "{:<13} {:<10} {}",
                    folder.label(),
                    marker,
                    config.folders.get(folder, &defs).display()
                );
            }
        }
        Commands::Set { folder, path } => {
            let path = paths::normalize(&path);
            config.folders.set(folder, path, false);
            config.save()?;
        }
        Commands::UseDefault { folder } => {
            config.folders.set(folder, defs.get(folder), true);
            config.save()?;
        }
        Commands::Open { folder } => {
            let path = config.folders.get(folder, &defs);
            open::that(&path).map_err(|e| AlcoveError::Explore(path, e))?;
        }
    }
    Ok(())
}
