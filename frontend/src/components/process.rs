//! Upload form: email, file picker, submit button and progress bar.

use leptos::*;
use web_sys::File;

use crate::config::{api_base_url, upload_endpoint};
use crate::services::{
    clear_and_notify, process_submission, select_and_notify, settle_after_delay, XhrTransport,
};
use crate::state::UploadFlow;
use crate::types::FileMeta;
use crate::{FileUploadArea, ProgressBar, Toaster};

#[component]
pub fn ProcessCard(flow: RwSignal<UploadFlow<File>>) -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    let is_processing = Signal::derive(move || flow.with(|f| f.is_processing()));
    let is_idle = move || flow.with(|f| f.is_idle());

    let on_select = Callback::new(move |file: File| {
        let meta = FileMeta::from_file(&file);
        select_and_notify(&flow, &toaster, meta, file);
    });

    let on_clear = Callback::new(move |_: ()| clear_and_notify(&flow, &toaster));

    let on_submit = move |_| {
        spawn_local(async move {
            let transport = XhrTransport::new(upload_endpoint(api_base_url()));
            if let Some(ticket) = process_submission(&flow, &transport, &toaster).await {
                settle_after_delay(flow, ticket).await;
            }
        });
    };

    view! {
        <div class="card process-card">
            <div class="card-header">
                <i class="fas fa-file-upload"></i>
                " Upload & Process"
            </div>

            <div class="card-body">
                <div class="email-field">
                    <label for="email" class="field-label">
                        <i class="fas fa-envelope"></i>
                        " Recipient Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        class="text-input"
                        placeholder="user@example.com"
                        prop:value=move || flow.with(|f| f.email().to_string())
                        on:input=move |ev| flow.update(|f| f.set_email(event_target_value(&ev)))
                    />
                </div>

                <FileUploadArea
                    selected_name=Signal::derive(move || flow.with(|f| f.selected_name()))
                    is_processing=is_processing
                    rejected=Signal::derive(move || flow.with(|f| f.selection_rejected()))
                    on_select=on_select
                    on_clear=on_clear
                />

                <button
                    class="btn btn-primary submit-button"
                    class:busy=move || is_processing.get()
                    disabled=move || !is_idle()
                    on:click=on_submit
                >
                    {move || {
                        if is_processing.get() {
                            view! {
                                <i class="fas fa-spinner fa-spin"></i>
                                " Processing..."
                            }
                                .into_view()
                        } else {
                            view! {
                                <i class="fas fa-paper-plane"></i>
                                " Process Consignments"
                            }
                                .into_view()
                        }
                    }}
                </button>

                <Show when=move || is_processing.get() fallback=|| view! {}>
                    <ProgressBar
                        percent=Signal::derive(move || flow.with(|f| f.progress()))
                        label=Signal::derive(move || flow.with(|f| f.progress_label().to_string()))
                    />
                </Show>
            </div>
        </div>
    }
}
