//! Static help card next to the upload form.

use leptos::*;

const STEPS: [(&str, &str); 3] = [
    ("Upload File", "Drag & drop your Excel/CSV file or click to browse"),
    ("Process Data", "System extracts consignments and fetches tracking data"),
    ("Get Results", "View tracking details with PDF links & screenshots"),
];

const FILE_TYPES: [&str; 3] = [".xlsx", ".xls", ".csv"];

const COLUMN_NAMES: [&str; 4] = ["Consignment No", "Tracking ID", "AWB Number", "Barcode"];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <div class="card how-it-works">
            <div class="card-header">
                <i class="fas fa-info-circle"></i>
                " How It Works"
            </div>
            <div class="card-body">
                <h3 class="section-title">"Simple 3-Step Process"</h3>
                <div class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(idx, (title, description))| {
                            view! {
                                <div class="step" style=format!("animation-delay: {}ms;", 300 + idx * 100)>
                                    <div class="step-number">{idx + 1}</div>
                                    <div>
                                        <h4 class="step-title">{*title}</h4>
                                        <p class="step-description">{*description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="formats">
                    <h4 class="section-title">"Supported Formats"</h4>
                    <div class="chips">
                        {FILE_TYPES
                            .iter()
                            .map(|format| view! { <span class="chip chip-format">{*format}</span> })
                            .collect_view()}
                    </div>
                </div>

                <div class="column-tips">
                    <h4 class="section-title">"Column Name Tips"</h4>
                    <p class="tip-text">"Use these common names for best results:"</p>
                    <div class="chips">
                        {COLUMN_NAMES
                            .iter()
                            .map(|name| view! { <span class="chip chip-column">{*name}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
