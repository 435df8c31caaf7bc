//! Toast notifications.
//!
//! [`Toaster`] is provided through context by the root view. Every toast
//! removes itself after its duration; the close button removes it early.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::state::{Notify, ToastQueue};
use crate::types::ToastKind;

/// Copyable handle to the on-screen toast list.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::new()),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    fn queue(&self) -> ReadSignal<ToastQueue> {
        self.queue.read_only()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for Toaster {
    fn notify_with(&self, message: &str, kind: ToastKind, duration_ms: u32) {
        let Some(id) = self
            .queue
            .try_update(|queue| queue.push(message, kind, duration_ms))
        else {
            return;
        };

        let queue = self.queue;
        Timeout::new(duration_ms, move || {
            queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }
}

/// Bottom-right stack of active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let queue = toaster.queue();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="status">
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-close"
                                title="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
