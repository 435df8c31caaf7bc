//! Per-consignment tracking results.

use leptos::*;

use crate::services::copy_to_clipboard;
use crate::state::Notify;
use crate::types::{ResultRecord, ToastKind};
use crate::Toaster;

/// Key for a rendered result card.
///
/// Covers the whole record so a re-upload that changes a row at the same
/// position rebuilds its card.
pub fn result_key(idx: usize, record: &ResultRecord) -> (usize, ResultRecord) {
    (idx, record.clone())
}

/// Link row with a copy button.
#[component]
fn ResultLink(label: &'static str, url: String) -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let copy_url = url.clone();

    let on_copy = move |_| {
        let url = copy_url.clone();
        spawn_local(async move {
            match copy_to_clipboard(&url).await {
                Ok(()) => toaster.notify("Copied to clipboard", ToastKind::Success),
                Err(e) => {
                    log::warn!("Clipboard write failed: {}", e);
                    toaster.notify("Could not copy to clipboard", ToastKind::Error);
                }
            }
        });
    };

    view! {
        <div class="result-link">
            <span class="result-link-label">{label}</span>
            <a href=url.clone() target="_blank" rel="noopener noreferrer" class="result-link-url">
                {url}
            </a>
            <button class="result-link-copy" title="Copy link" on:click=on_copy>
                <i class="fas fa-copy"></i>
            </button>
        </div>
    }
}

/// A single result card.
#[component]
pub fn ResultItem(record: ResultRecord) -> impl IntoView {
    let links = record.links();

    view! {
        <div class="result-item">
            <div class="result-heading">
                <i class="fas fa-truck"></i>
                <h3>{record.consignment_number}</h3>
            </div>
            <span class=record.status.css_class()>
                <i class=record.status.icon()></i>
                " "
                {record.status.label()}
            </span>
            <p class="result-message">{record.message}</p>
            {links
                .into_iter()
                .map(|(label, url)| view! { <ResultLink label=label url=url/> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ResultsPanel(#[prop(into)] results: Signal<Vec<ResultRecord>>) -> impl IntoView {
    view! {
        <div class="results-panel">
            <h3 class="results-title">
                <i class="fas fa-file-contract"></i>
                " Processing Results"
            </h3>
            <div class="results-list">
                <For
                    each=move || results.get().into_iter().enumerate()
                    key=|(idx, record)| result_key(*idx, record)
                    children=move |(_, record)| view! { <ResultItem record=record/> }
                />
            </div>
        </div>
    }
}
