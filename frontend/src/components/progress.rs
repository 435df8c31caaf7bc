use leptos::*;

#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<u8>,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="progress-section">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", percent.get())
                ></div>
            </div>
            <div class="progress-meta">
                <span>{move || label.get()}</span>
                <span>{move || format!("{}%", percent.get())}</span>
            </div>
        </div>
    }
}
