mod panel;
mod state;
mod ui;

pub use panel::FoldersPanel;
