//! Error taxonomy of the dashboard
//!
//! Errors never travel past the operation that produced them: the caller logs
//! the error and shows the localized message from `message_key()`.

use crate::shared::i18n::MessageKey;
use thiserror::Error;

/// Loading the shipment list or a shipment history failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode query: {0}")]
    Encode(String),
}

impl FetchError {
    pub fn message_key(&self) -> MessageKey {
        MessageKey::LoadError
    }
}

/// An uploaded file is not valid JSON or not shaped like invoice records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{file}: invalid JSON: {message}")]
    InvalidJson { file: String, message: String },

    #[error("{file}: expected an invoice object or an array of them")]
    UnexpectedShape { file: String },

    #[error("{file}: record {index} is not an object")]
    NotAnObject { file: String, index: usize },

    #[error("{file}: record {index} is missing `{field}`")]
    MissingField {
        file: String,
        index: usize,
        field: &'static str,
    },

    #[error("{file}: record {index} has invalid `{field}`: {message}")]
    InvalidField {
        file: String,
        index: usize,
        field: &'static str,
        message: String,
    },
}

impl ParseError {
    pub fn message_key(&self) -> MessageKey {
        MessageKey::InvalidJson
    }
}

/// Submitting the invoice batch failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upload failed: {status} {body}")]
    Status { status: u16, body: String },

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl UploadError {
    pub fn message_key(&self) -> MessageKey {
        MessageKey::ErrorUpload
    }
}

/// The user tried to confirm an upload that cannot be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No files to upload")]
    NoFiles,

    #[error("Another batch is still being processed")]
    Busy,
}

impl ValidationError {
    pub fn message_key(&self) -> MessageKey {
        match self {
            ValidationError::NoFiles => MessageKey::NoFilesSelected,
            ValidationError::Busy => MessageKey::Uploading,
        }
    }
}
