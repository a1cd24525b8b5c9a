//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - metadata of the file held by the form
//! - **Error Types** - rejections surfaced to the user

use std::fmt;
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// Metadata of a selected or dropped file.
///
/// Only what the form consults: the name for display, the declared MIME
/// type for the allow-list and the byte size for the upload limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    /// File name as reported by the browser
    pub name: String,
    /// Client-declared MIME type (may be empty)
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

impl From<&web_sys::File> for FileMeta {
    fn from(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
        }
    }
}

impl fmt::Display for FileMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} bytes)", self.name, self.mime_type, self.size)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Reasons a file or a submission is rejected.
///
/// The `Display` text is the exact message shown in the blocking alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Declared MIME type outside the allow-list.
    #[error("Please upload only PDF or DOCX files.")]
    UnsupportedType,

    /// Submit pressed with no file held.
    #[error("Please select a file to upload.")]
    MissingFile,

    /// File above the size limit.
    #[error("File size must be less than 16MB.")]
    TooLarge,
}

/// Result type alias for upload operations.
pub type AppResult<T> = Result<T, UploadError>;
