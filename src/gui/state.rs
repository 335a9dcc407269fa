use std::sync::mpsc::{channel, Receiver, Sender};

/// Requests panels send back to the app, which owns the config.
#[derive(Debug)]
pub enum CommandMessage {
    ApplyFolders,
    ResetFolders,
}

pub struct CommandChannels {
    pub sender: Sender<CommandMessage>,
    pub receiver: Receiver<CommandMessage>,
}

impl CommandChannels {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }
}

impl Default for CommandChannels {
    fn default() -> Self {
        Self::new()
    }
}
