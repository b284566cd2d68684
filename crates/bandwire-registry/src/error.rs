/// Errors that can occur while building or querying a command registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No registered command matches the lookup key.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command collides with an existing entry on its triple or name.
    #[error("duplicate command {command} (collides with {existing})")]
    DuplicateCommand { command: String, existing: String },

    /// An incoming packet could not be decoded.
    #[error("frame error: {0}")]
    Frame(#[from] bandwire_frame::FrameError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
