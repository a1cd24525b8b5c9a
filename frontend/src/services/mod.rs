//! Upload form logic, independent of the DOM.
//!
//! # Services
//!
//! - [`validation`] - MIME allow-list and size limit checks
//! - [`animation`] - Cosmetic progress bar animation
//! - [`controller`] - Event handlers driving an [`UploadView`]

pub mod validation;
pub mod animation;
pub mod controller;

pub use validation::*;
pub use animation::*;
pub use controller::*;
