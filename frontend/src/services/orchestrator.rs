//! Drives one submission through the upload flow.
//!
//! The flow itself is pure state; this module performs the single network
//! call and routes its progress and outcome back into the store, emitting
//! toasts along the way.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::{RwSignal, SignalUpdate};

use crate::config::SETTLE_DELAY_MS;
use crate::services::upload::{ProgressCallback, UploadTransport};
use crate::state::{Notify, UploadFlow};
use crate::types::{FileMeta, ToastKind};

/// Shared, mutable access to the page's [`UploadFlow`].
pub trait FlowStore<F>: Clone + 'static {
    /// Run `f` against the flow. `None` once the owner has been dropped.
    fn with_flow<R>(&self, f: impl FnOnce(&mut UploadFlow<F>) -> R) -> Option<R>;
}

impl<F: 'static> FlowStore<F> for RwSignal<UploadFlow<F>> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut UploadFlow<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<F: 'static> FlowStore<F> for Rc<RefCell<UploadFlow<F>>> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut UploadFlow<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Validate, upload and interpret one submission.
///
/// Returns the ticket to settle, or `None` if nothing was sent.
pub async fn process_submission<T, S, N>(store: &S, transport: &T, notifier: &N) -> Option<u64>
where
    T: UploadTransport,
    S: FlowStore<T::File>,
    N: Notify,
{
    let submission = match store.with_flow(|flow| flow.begin_submit())? {
        Ok(submission) => submission,
        Err(err) => {
            if err.is_validation() {
                log::warn!("Submission refused: {:?}", err);
            } else {
                log::info!("Submission ignored while busy");
            }
            notifier.notify(&err.to_string(), ToastKind::Error);
            return None;
        }
    };

    let ticket = submission.ticket;
    log::info!(
        "🚚 Submitting {} (ticket {}, notify email: {})",
        submission.file_name,
        ticket,
        submission.email.is_some()
    );

    let progress_store = store.clone();
    let on_progress: ProgressCallback = Rc::new(move |percent| {
        progress_store.with_flow(|flow| flow.record_progress(ticket, percent));
    });

    let outcome = transport
        .upload(
            submission.file,
            submission.file_name,
            submission.email,
            on_progress,
        )
        .await;

    match &outcome {
        Ok(response) => log::info!(
            "✅ Upload {} done, {} result(s)",
            ticket,
            response.results.as_ref().map_or(0, Vec::len)
        ),
        Err(err) => log::error!("❌ Upload {} failed: {:?}", ticket, err),
    }

    let notice = store.with_flow(|flow| flow.complete(ticket, outcome))??;
    notifier.notify(&notice.message, notice.kind);
    Some(ticket)
}

/// Wait out the grace period, then reset the progress bar.
pub async fn settle_after_delay<F: Clone, S: FlowStore<F>>(store: S, ticket: u64) {
    gloo_timers::future::TimeoutFuture::new(SETTLE_DELAY_MS).await;
    store.with_flow(|flow| flow.settle(ticket));
}

/// Try to select `file`, toasting on rejection.
pub fn select_and_notify<F, S, N>(store: &S, notifier: &N, meta: FileMeta, file: F) -> bool
where
    F: Clone,
    S: FlowStore<F>,
    N: Notify,
{
    let name = meta.name.clone();
    match store.with_flow(|flow| flow.select_file(meta, file)) {
        Some(Ok(())) => {
            log::info!("📄 Selected {}", name);
            true
        }
        Some(Err(err)) => {
            log::warn!("Rejected {}: {:?}", name, err);
            notifier.notify(&err.to_string(), ToastKind::Error);
            false
        }
        None => false,
    }
}

/// Drop the current selection and confirm with a toast.
pub fn clear_and_notify<F, S, N>(store: &S, notifier: &N)
where
    F: Clone,
    S: FlowStore<F>,
    N: Notify,
{
    match store.with_flow(|flow| flow.clear_selection()) {
        Some(Ok(())) => notifier.notify("File selection cleared", ToastKind::Success),
        Some(Err(err)) => notifier.notify(&err.to_string(), ToastKind::Error),
        None => {}
    }
}
