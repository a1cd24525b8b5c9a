//! Resume upload form with drag & drop support.
//!
//! Binds the [`UploadController`] to the page: [`LeptosView`] turns the
//! controller's view operations into signals, and the form's event
//! handlers feed it metadata read from the native file lists.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::*;
use web_sys::FileList;

use crate::components::ProgressSection;
use crate::config::{accept_attribute, FILE_FIELD_NAME, PROGRESS_TICK_MS, UPLOAD_ACTION};
use crate::services::{UploadController, UploadView};
use crate::types::FileMeta;

// =============================================================================
// Signal-backed view
// =============================================================================

/// [`UploadView`] implementation backed by Leptos signals.
#[derive(Clone, Copy)]
pub struct LeptosView {
    pub file_name: RwSignal<Option<String>>,
    pub file_info_visible: RwSignal<bool>,
    pub drop_zone_visible: RwSignal<bool>,
    pub drag_active: RwSignal<bool>,
    pub submit_enabled: RwSignal<bool>,
    pub submit_loading: RwSignal<bool>,
    pub progress_visible: RwSignal<bool>,
    pub progress_width: RwSignal<f64>,
    input: NodeRef<Input>,
}

impl LeptosView {
    pub fn new(input: NodeRef<Input>) -> Self {
        Self {
            file_name: create_rw_signal(None),
            file_info_visible: create_rw_signal(false),
            drop_zone_visible: create_rw_signal(true),
            drag_active: create_rw_signal(false),
            submit_enabled: create_rw_signal(false),
            submit_loading: create_rw_signal(false),
            progress_visible: create_rw_signal(false),
            progress_width: create_rw_signal(0.0),
            input,
        }
    }
}

impl UploadView for LeptosView {
    type Files = FileList;

    fn set_file_name(&self, name: Option<&str>) {
        self.file_name.set(name.map(str::to_owned));
    }

    fn set_file_info_visible(&self, visible: bool) {
        self.file_info_visible.set(visible);
    }

    fn set_drop_zone_visible(&self, visible: bool) {
        self.drop_zone_visible.set(visible);
    }

    fn set_drag_active(&self, active: bool) {
        self.drag_active.set(active);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn set_submit_loading(&self, loading: bool) {
        self.submit_loading.set(loading);
    }

    fn set_progress_visible(&self, visible: bool) {
        self.progress_visible.set(visible);
    }

    fn set_progress_width(&self, percent: f64) {
        self.progress_width.set(percent);
    }

    fn set_input_files(&self, files: &FileList) {
        match self.input.get_untracked() {
            Some(input) => input.set_files(Some(files)),
            None => log::warn!("File input not mounted, dropped files not assigned"),
        }
    }

    fn clear_input(&self) {
        if let Some(input) = self.input.get_untracked() {
            input.set_value("");
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = window().alert_with_message(message) {
            log::error!("Failed to show alert {:?}: {:?}", message, e);
        }
    }
}

type Controller = StoredValue<UploadController<LeptosView>>;

/// Metadata of the first file in `files`.
fn first_file(files: &FileList) -> Option<FileMeta> {
    files.get(0).map(|file| FileMeta::from(&file))
}

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Drives the progress bar until the controller reports it finished.
fn animate_progress(controller: Controller) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(PROGRESS_TICK_MS).await;
            let running = controller
                .try_update_value(|c| c.tick_progress(&mut rand::thread_rng()))
                .unwrap_or(false);
            if !running {
                break;
            }
        }
    });
}

// =============================================================================
// Component
// =============================================================================

#[component]
pub fn UploadSection() -> impl IntoView {
    let input_ref = create_node_ref::<Input>();
    let ui = LeptosView::new(input_ref);
    let controller: Controller = store_value(UploadController::new(ui));

    let on_file_change = move |_: ev::Event| {
        let file = input_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| first_file(&files));
        controller.update_value(|c| {
            let _ = c.on_input_change(file);
        });
    };

    // Clicking the drop zone opens the native picker
    let open_picker = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        controller.update_value(|c| c.on_drag_over());
    };

    let on_drag_leave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        controller.update_value(|c| c.on_drag_leave());
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| {
                let first = first_file(&files)?;
                Some((files, first))
            });
        controller.update_value(|c| {
            let _ = c.on_drop(dropped);
        });
    };

    let on_remove = move |_: ev::MouseEvent| {
        controller.update_value(|c| c.remove_file());
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        match controller.try_update_value(|c| c.on_submit()) {
            Some(Ok(true)) => animate_progress(controller),
            Some(Ok(false)) => {}
            Some(Err(_)) | None => ev.prevent_default(),
        }
    };

    view! {
        <form
            id="uploadForm"
            class="upload-form"
            action=UPLOAD_ACTION
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <div
                class="upload-area"
                id="uploadArea"
                class:dragover=move || ui.drag_active.get()
                style:display=move || display(ui.drop_zone_visible.get())
                on:click=open_picker
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📄"</div>
                <div class="upload-text">"Drag & drop your resume here"</div>
                <div class="upload-hint">"or click to browse"</div>
                <div class="upload-hint mt-20">"PDF, DOCX or DOC, up to 16MB"</div>
            </div>

            <input
                type="file"
                id="resumeFile"
                name=FILE_FIELD_NAME
                accept=accept_attribute()
                style="display:none"
                node_ref=input_ref
                on:change=on_file_change
            />

            <div
                class="file-info"
                id="fileInfo"
                style:display=move || display(ui.file_info_visible.get())
            >
                <span class="file-icon">"📄"</span>
                <span class="file-name" id="fileName">
                    {move || ui.file_name.get().unwrap_or_default()}
                </span>
                <button type="button" class="remove-file" id="removeFile" on:click=on_remove>
                    "✕"
                </button>
            </div>

            <ProgressSection
                visible=ui.progress_visible.read_only()
                width=ui.progress_width.read_only()
            />

            <button
                type="submit"
                class="btn btn-primary"
                id="submitBtn"
                disabled=move || !ui.submit_enabled.get()
            >
                <span
                    id="btnText"
                    style:display=move || if ui.submit_loading.get() { "none" } else { "inline" }
                >
                    "Generate Portfolio"
                </span>
                <span
                    id="btnLoading"
                    style:display=move || if ui.submit_loading.get() { "inline" } else { "none" }
                >
                    "⏳ Uploading..."
                </span>
            </button>
        </form>
    }
}
