//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Consignment Processor"</h1>
            <p class="subtitle">
                "Upload your Excel or CSV file with consignment numbers and receive a detailed "
                "tracking report with PDF links and screenshots."
            </p>
        </div>
    }
}
