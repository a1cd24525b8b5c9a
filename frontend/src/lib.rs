//! Resume Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly upload form for the resume portfolio generator. It checks
//! the chosen file on the client, then lets the browser POST the form.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPage                                                  │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadSection                                          │
//! │      ├── LeptosView ──▶ UploadController (services)          │
//! │      └── ProgressSection                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Limits, allow-lists and form target
//! - [`types`] - File metadata and upload errors
//! - [`components`] - UI components (Hero, Upload, Progress)
//! - [`services`] - DOM-independent validation, animation and controller

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{AppResult, FileMeta, UploadError};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Installs the panic hook and console logger, then mounts the app.
pub fn start() {
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 Resume Upload - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                    <Route path="/upload" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadSection/>
        </div>
    }
}
