//! Spreadsheet picker with drag & drop support.
//!
//! Forwards the first picked or dropped file; type checks happen in the
//! upload flow.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, MouseEvent};

use crate::config::ACCEPT_HINT;

/// CSS class of the drop zone for the given visual inputs.
pub fn drop_zone_class(dragging: bool, has_selection: bool, rejected: bool) -> &'static str {
    if dragging {
        "drop-zone dragging"
    } else if rejected {
        "drop-zone rejected"
    } else if has_selection {
        "drop-zone selected"
    } else {
        "drop-zone"
    }
}

fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|files| files.get(0))
}

#[component]
pub fn FileUploadArea(
    /// Name of the current selection
    #[prop(into)]
    selected_name: Signal<Option<String>>,
    /// Picking and dropping are ignored while true
    #[prop(into)]
    is_processing: Signal<bool>,
    /// Last selection attempt was refused
    #[prop(into)]
    rejected: Signal<bool>,
    #[prop(into)] on_select: Callback<File>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let has_selection = move || selected_name.with(Option::is_some);

    let open_picker = move |_: MouseEvent| {
        if is_processing.get_untracked() {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            on_select.call(file);
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !is_processing.get_untracked() {
            set_is_dragging.set(true);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let on_drag_leave = move |_: DragEvent| set_is_dragging.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragging.set(false);

        if is_processing.get_untracked() {
            return;
        }
        if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
            on_select.call(file);
        }
    };

    view! {
        <div class="upload-field">
            <label class="field-label">
                <i class="fas fa-file-excel"></i>
                " Upload File"
            </label>

            <div
                class=move || drop_zone_class(is_dragging.get(), has_selection(), rejected.get())
                class:disabled=move || is_processing.get()
                on:click=open_picker
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <Show when=has_selection fallback=|| view! {}>
                    <button
                        class="drop-zone-clear"
                        title="Clear selected file"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_clear.call(());
                        }
                    >
                        <i class="fas fa-times-circle"></i>
                    </button>
                </Show>

                <i class="fas fa-cloud-upload-alt drop-zone-icon"></i>
                <p class="drop-zone-hint">"Drag & drop your Excel/CSV file here"</p>
                <p class="drop-zone-hint">"or click to browse"</p>
                <p class="drop-zone-file">
                    {move || selected_name.get().unwrap_or_else(|| "No file selected".to_string())}
                </p>
            </div>

            <input
                type="file"
                node_ref=file_input
                accept=ACCEPT_HINT
                style="display:none"
                on:change=on_file_change
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_zone_class_depends_only_on_inputs() {
        assert_eq!(drop_zone_class(false, false, false), "drop-zone");
        assert_eq!(drop_zone_class(false, true, false), "drop-zone selected");
        assert_eq!(drop_zone_class(false, true, true), "drop-zone rejected");
        assert_eq!(drop_zone_class(false, false, true), "drop-zone rejected");
    }

    #[test]
    fn test_dragging_highlight_wins() {
        assert_eq!(drop_zone_class(true, false, false), "drop-zone dragging");
        assert_eq!(drop_zone_class(true, true, true), "drop-zone dragging");
    }
}
