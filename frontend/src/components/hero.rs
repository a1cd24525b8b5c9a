//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload Your Resume"</h1>
            <p class="subtitle">
                "Drop a PDF or Word resume and we will turn it into a portfolio website. "
                "Files up to 16MB are accepted."
            </p>
        </div>
    }
}
