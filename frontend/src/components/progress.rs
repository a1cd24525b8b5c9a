use leptos::*;

/// Upload progress bar. Hidden until the form is submitted.
#[component]
pub fn ProgressSection(visible: ReadSignal<bool>, width: ReadSignal<f64>) -> impl IntoView {
    view! {
        <div
            class="progress-container"
            id="progressContainer"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div class="progress">
                <div
                    class="progress-bar"
                    role="progressbar"
                    style:width=move || format!("{:.1}%", width.get())
                ></div>
            </div>
            <div class="progress-hint">"Parsing your resume..."</div>
        </div>
    }
}
