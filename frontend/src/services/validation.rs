//! Client-side file checks.
//!
//! Advisory only: the MIME type is whatever the browser declares, so the
//! server has to validate again.

use crate::config::{ACCEPTED_MIME_TYPES, MAX_FILE_SIZE};
use crate::types::{AppResult, FileMeta, UploadError};

/// Whether `mime_type` is on the allow-list. Exact match.
pub fn is_accepted_type(mime_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime_type)
}

/// Rejects files whose declared type is not on the allow-list.
pub fn check_type(file: &FileMeta) -> AppResult<()> {
    if is_accepted_type(&file.mime_type) {
        Ok(())
    } else {
        Err(UploadError::UnsupportedType)
    }
}

/// Rejects files strictly larger than [`MAX_FILE_SIZE`].
pub fn check_size(file: &FileMeta) -> AppResult<()> {
    if file.size > MAX_FILE_SIZE {
        Err(UploadError::TooLarge)
    } else {
        Ok(())
    }
}
