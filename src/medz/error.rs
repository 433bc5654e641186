use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedzError {
    #[error("'{0}' must be an integer index")]
    InvalidIndex(String),

    #[error("index {given} is out of range (the current list has {max} entries)")]
    IndexOutOfRange { given: i64, max: usize },

    #[error("there is no such setting '{id}', valid settings are: {}", .valid.join(", "))]
    UnknownSetting { id: String, valid: Vec<String> },

    #[error("no item selected, run 'details <n>' first")]
    NoSelection,

    #[error("'{0}' has no episodes")]
    Unsupported(String),

    #[error("'{0}' is not a valid command")]
    UnrecognizedCommand(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MedzError>;
