// src/core/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Not authorized")]
    NotAuthorized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File is too large. Maximum size is {limit_mb}MB.")]
    FileTooLarge { size_bytes: u64, limit_mb: u64 },

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Error reading file: {0}")]
    FileRead(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Site contact email is not configured")]
    MissingRecipient,
}
