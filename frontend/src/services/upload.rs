//! HTTP service uploading consignment spreadsheets to the processing API.
//!
//! `fetch` cannot report upload progress, so the browser transport drives an
//! `XMLHttpRequest` and bridges its events into a future.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::types::{AppError, AppResult, UploadResponse};

/// Last-resort message when neither the server nor the transport said anything.
pub const UPLOAD_FAILED_FALLBACK: &str = "Upload failed.";

/// Transport text for requests that never got an HTTP answer.
pub const NETWORK_ERROR: &str = "Network Error";

/// Receives upload percentages (0-100) while the body is sent.
pub type ProgressCallback = Rc<dyn Fn(u8)>;

/// Sends one spreadsheet to the processing API.
pub trait UploadTransport {
    /// Browser file handle or a test stand-in.
    type File: Clone + 'static;

    /// POST `file` (and `email` when given) once; no retry, no timeout.
    fn upload(
        &self,
        file: Self::File,
        file_name: String,
        email: Option<String>,
        on_progress: ProgressCallback,
    ) -> impl Future<Output = AppResult<UploadResponse>>;
}

/// `round(loaded * 100 / total)`, treating an unknown total as 1, capped at 100.
pub fn upload_percent(loaded: f64, total: f64) -> u8 {
    let total = if total > 0.0 { total } else { 1.0 };
    let percent = (loaded.max(0.0) * 100.0 / total).round();
    percent.min(100.0) as u8
}

/// Pick the message shown for a failed upload.
pub fn failure_message(server_message: Option<&str>, transport_text: Option<&str>) -> String {
    server_message
        .into_iter()
        .chain(transport_text)
        .map(str::trim)
        .find(|m| !m.is_empty())
        .unwrap_or(UPLOAD_FAILED_FALLBACK)
        .to_string()
}

/// Interpret the status and body of a finished request.
pub fn parse_upload_body(status: u16, body: &str) -> AppResult<UploadResponse> {
    if !(200..300).contains(&status) {
        let server_message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_string));
        let transport_text = format!("Request failed with status code {}", status);
        return Err(AppError::Transport {
            status: Some(status),
            message: failure_message(server_message.as_deref(), Some(&transport_text)),
        });
    }

    if body.trim().is_empty() {
        return Ok(UploadResponse::default());
    }

    serde_json::from_str(body).map_err(|e| AppError::MalformedResponse(e.to_string()))
}

fn js_error(context: &str, err: JsValue) -> AppError {
    let detail = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    AppError::Transport {
        status: None,
        message: failure_message(None, Some(&format!("{}: {}", context, detail))),
    }
}

/// How the request ended, as reported by XHR events.
#[derive(Debug, PartialEq, Eq)]
enum XhrSettled {
    Loaded,
    Failed,
}

type SettleSlot = Rc<RefCell<Option<oneshot::Sender<XhrSettled>>>>;

/// Resolve the pending request once; later events are ignored.
fn settle_once(slot: &SettleSlot, outcome: XhrSettled) {
    if let Some(tx) = slot.borrow_mut().take() {
        let _ = tx.send(outcome);
    }
}

fn settle_handler(
    slot: &SettleSlot,
    outcome: fn() -> XhrSettled,
) -> Closure<dyn FnMut(web_sys::Event)> {
    let slot = slot.clone();
    Closure::wrap(Box::new(move |_: web_sys::Event| {
        settle_once(&slot, outcome());
    }) as Box<dyn FnMut(web_sys::Event)>)
}

/// Browser transport backed by `XMLHttpRequest`.
#[derive(Clone, Debug)]
pub struct XhrTransport {
    endpoint: String,
}

impl XhrTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(
        &self,
        file: File,
        file_name: String,
        email: Option<String>,
        on_progress: ProgressCallback,
    ) -> AppResult<UploadResponse> {
        let form_data = FormData::new().map_err(|e| js_error("Failed to create FormData", e))?;
        form_data
            .append_with_blob_and_filename("file", &file, &file_name)
            .map_err(|e| js_error("Failed to append file", e))?;
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            form_data
                .append_with_str("email", &email)
                .map_err(|e| js_error("Failed to append email", e))?;
        }

        let xhr = XmlHttpRequest::new().map_err(|e| js_error("Failed to create request", e))?;
        xhr.open_with_async("POST", &self.endpoint, true)
            .map_err(|e| js_error("Failed to open request", e))?;

        let (tx, rx) = oneshot::channel::<XhrSettled>();
        let tx: SettleSlot = Rc::new(RefCell::new(Some(tx)));

        let last_percent = Rc::new(Cell::new(0u8));
        let onprogress = Closure::wrap(Box::new(move |event: ProgressEvent| {
            let total = if event.length_computable() { event.total() } else { 0.0 };
            let percent = upload_percent(event.loaded(), total);
            if percent >= last_percent.get() {
                last_percent.set(percent);
                on_progress(percent);
            }
        }) as Box<dyn FnMut(ProgressEvent)>);

        let onload = settle_handler(&tx, || XhrSettled::Loaded);
        // `loadend` follows every outcome, including abort and timeout
        let onloadend = settle_handler(&tx, || XhrSettled::Failed);

        let upload = xhr
            .upload()
            .map_err(|e| js_error("Upload progress unavailable", e))?;
        upload.set_onprogress(Some(onprogress.as_ref().unchecked_ref()));
        xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
        xhr.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));

        log::info!("📤 POST {} ({})", self.endpoint, file_name);
        xhr.send_with_opt_form_data(Some(&form_data))
            .map_err(|e| js_error("Failed to send request", e))?;

        let settled = rx.await.unwrap_or(XhrSettled::Failed);

        // Handlers must not outlive their closures.
        upload.set_onprogress(None);
        xhr.set_onload(None);
        xhr.set_onloadend(None);

        match settled {
            XhrSettled::Loaded => {
                let status = xhr.status().map_err(|e| js_error("Failed to read status", e))?;
                let body = xhr
                    .response_text()
                    .map_err(|e| js_error("Failed to read response", e))?
                    .unwrap_or_default();
                log::info!("📥 Upload answered with HTTP {}", status);
                parse_upload_body(status, &body)
            }
            XhrSettled::Failed => {
                log::error!("❌ Upload request failed before any response");
                Err(AppError::Transport {
                    status: None,
                    message: failure_message(None, Some(NETWORK_ERROR)),
                })
            }
        }
    }
}

impl UploadTransport for XhrTransport {
    type File = File;

    fn upload(
        &self,
        file: File,
        file_name: String,
        email: Option<String>,
        on_progress: ProgressCallback,
    ) -> impl Future<Output = AppResult<UploadResponse>> {
        self.send(file, file_name, email, on_progress)
    }
}
