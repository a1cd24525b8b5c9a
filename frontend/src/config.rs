//! Application configuration.
//!
//! Centralized configuration for the resume upload form.
//! Everything here is a compile-time constant; the limits mirror the
//! ones enforced by the server that receives the form.

/// Maximum file size for upload (in bytes).
///
/// 16 MiB limit, inclusive.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// MIME types accepted by the drop zone.
///
/// PDF, DOCX and legacy Word documents.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
];

/// File extensions offered by the native file picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc"];

/// Delay between two frames of the progress animation (ms).
pub const PROGRESS_TICK_MS: u32 = 500;

/// Upper bound (exclusive) of the random width added per frame, in percent.
pub const PROGRESS_MAX_STEP: f64 = 15.0;

/// Form target. The browser performs the actual POST.
pub const UPLOAD_ACTION: &str = "/upload";

/// Multipart field name the server reads the file from.
pub const FILE_FIELD_NAME: &str = "resume";

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Document title.
pub const APP_TITLE: &str = "Upload Resume";

/// Value of the file input's `accept` attribute, e.g. `.pdf,.docx,.doc`.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}
