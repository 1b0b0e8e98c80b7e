use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidColorFormat(String),

    #[error("Unknown palette color key: {0}")]
    UnknownColorKey(String),

    #[error("Palette is missing stop {0}")]
    MissingStop(String),
}

pub type Result<T, E = ColorError> = std::result::Result<T, E>;
