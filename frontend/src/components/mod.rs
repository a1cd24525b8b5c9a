//! UI Components for the resume upload page.
//!
//! # Layout Components
//! - [`Hero`] - Page title and description
//!
//! # Feature Components
//! - [`UploadSection`] - Upload form with drag & drop
//! - [`ProgressSection`] - Cosmetic upload progress bar

mod hero;
mod upload;
mod progress;

pub use hero::*;
pub use upload::*;
pub use progress::*;
