//! Upload flow state machine.
//!
//! `UploadFlow` owns every piece of mutable page state: the selected file,
//! the notification email, upload progress and the last result list.
//! It performs no I/O; the async driver in [`crate::services::orchestrator`]
//! feeds it transport events and turns the returned [`Notice`]s into toasts.
//!
//! ```text
//!   Idle ──begin_submit──▶ Uploading ──complete──▶ Settling ──settle──▶ Idle
//!    ▲  (validation error)     │ record_progress
//!    └───────────────┘         └──────┘
//! ```
//!
//! Each submission carries a ticket. Events tagged with an older ticket are
//! dropped, so a late settle timer cannot reset a newer upload.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{ACCEPTED_MIME_TYPES, INITIAL_UPLOAD_PERCENT};
use crate::types::{
    AppError, AppResult, FileMeta, ResultRecord, StatsSummary, ToastKind, UploadResponse,
};

/// `local@domain.tld` with no whitespace anywhere.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

pub const IDLE_LABEL: &str = "Processing...";
pub const UPLOAD_STARTED_LABEL: &str = "Uploading file...";
pub const UPLOAD_DONE_LABEL: &str = "File uploaded successfully!";
pub const UPLOAD_DONE_FALLBACK: &str = "File uploaded successfully.";

/// Whether a MIME type is one of the accepted spreadsheet formats.
pub fn is_accepted_mime(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime)
}

/// Whether a (non-empty) email looks deliverable.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Lifecycle position of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Uploading { ticket: u64 },
    /// Upload finished; progress bar resets after the grace period.
    Settling { ticket: u64 },
}

/// A file picked by the user together with its metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<F> {
    pub meta: FileMeta,
    pub file: F,
}

/// Everything the transport needs for one upload.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission<F> {
    pub ticket: u64,
    pub file: F,
    pub file_name: String,
    /// Present only when the user typed a non-empty address
    pub email: Option<String>,
}

/// A message the driver should surface as a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Page state for the upload-and-report flow.
#[derive(Clone, Debug)]
pub struct UploadFlow<F> {
    selection: Option<Selection<F>>,
    selection_rejected: bool,
    email: String,
    phase: Phase,
    progress: u8,
    progress_label: String,
    results: Vec<ResultRecord>,
    last_ticket: u64,
}

impl<F> Default for UploadFlow<F> {
    fn default() -> Self {
        Self {
            selection: None,
            selection_rejected: false,
            email: String::new(),
            phase: Phase::Idle,
            progress: 0,
            progress_label: IDLE_LABEL.to_string(),
            results: Vec::new(),
            last_ticket: 0,
        }
    }
}

impl<F: Clone> UploadFlow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// True only while the request is in flight.
    pub fn is_processing(&self) -> bool {
        matches!(self.phase, Phase::Uploading { .. })
    }

    pub fn selection(&self) -> Option<&Selection<F>> {
        self.selection.as_ref()
    }

    pub fn selected_name(&self) -> Option<String> {
        self.selection.as_ref().map(|s| s.meta.name.clone())
    }

    pub fn selection_rejected(&self) -> bool {
        self.selection_rejected
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn progress_label(&self) -> &str {
        &self.progress_label
    }

    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    pub fn stats(&self) -> StatsSummary {
        StatsSummary::from_results(&self.results)
    }

    // -------------------------------------------------------------------------
    // User input
    // -------------------------------------------------------------------------

    /// Replace the selection if the file is a supported spreadsheet.
    ///
    /// A rejected file leaves the previous selection in place.
    pub fn select_file(&mut self, meta: FileMeta, file: F) -> AppResult<()> {
        if self.is_processing() {
            return Err(AppError::Busy);
        }
        if !is_accepted_mime(&meta.mime_type) {
            self.selection_rejected = true;
            return Err(AppError::UnsupportedFileType {
                mime: meta.mime_type,
            });
        }
        self.selection = Some(Selection { meta, file });
        self.selection_rejected = false;
        Ok(())
    }

    pub fn clear_selection(&mut self) -> AppResult<()> {
        if self.is_processing() {
            return Err(AppError::Busy);
        }
        self.selection = None;
        self.selection_rejected = false;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    // -------------------------------------------------------------------------
    // Submission lifecycle
    // -------------------------------------------------------------------------

    /// Validate the form and move to `Uploading`.
    ///
    /// Nothing changes when validation fails.
    pub fn begin_submit(&mut self) -> AppResult<Submission<F>> {
        if !self.is_idle() {
            return Err(AppError::Busy);
        }
        let selection = self.selection.as_ref().ok_or(AppError::NoFileSelected)?;
        if !self.email.is_empty() && !is_valid_email(&self.email) {
            return Err(AppError::InvalidEmailFormat);
        }

        let submission = Submission {
            ticket: self.last_ticket + 1,
            file: selection.file.clone(),
            file_name: selection.meta.name.clone(),
            email: Some(self.email.clone()).filter(|e| !e.is_empty()),
        };

        self.last_ticket = submission.ticket;
        self.phase = Phase::Uploading {
            ticket: submission.ticket,
        };
        self.set_progress(INITIAL_UPLOAD_PERCENT, UPLOAD_STARTED_LABEL);
        Ok(submission)
    }

    /// Apply a transport progress report. Progress never moves backwards.
    pub fn record_progress(&mut self, ticket: u64, percent: u8) {
        if self.phase != (Phase::Uploading { ticket }) {
            return;
        }
        let percent = percent.min(100).max(self.progress);
        self.set_progress(percent, &format!("Uploading... {}%", percent));
    }

    /// Interpret the transport outcome and move to `Settling`.
    ///
    /// Returns `None` if `ticket` is not the upload in flight.
    pub fn complete(
        &mut self,
        ticket: u64,
        outcome: AppResult<UploadResponse>,
    ) -> Option<Notice> {
        if self.phase != (Phase::Uploading { ticket }) {
            return None;
        }
        self.phase = Phase::Settling { ticket };

        match outcome {
            Ok(response) => {
                self.set_progress(100, UPLOAD_DONE_LABEL);
                if let Some(results) = response.results {
                    self.results = results;
                }
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UPLOAD_DONE_FALLBACK.to_string());
                Some(Notice::success(message))
            }
            Err(err) => Some(Notice::error(format!("Upload error: {}", err))),
        }
    }

    /// End the grace period: reset the bar and return to `Idle`.
    pub fn settle(&mut self, ticket: u64) {
        if self.phase == (Phase::Settling { ticket }) {
            self.set_progress(0, IDLE_LABEL);
            self.phase = Phase::Idle;
        }
    }

    fn set_progress(&mut self, percent: u8, label: &str) {
        self.progress = percent;
        self.progress_label = label.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResultStatus;

    type Flow = UploadFlow<&'static str>;

    fn csv(name: &str) -> FileMeta {
        FileMeta::new(name, "text/csv", 128)
    }

    fn record(number: &str, status: ResultStatus) -> ResultRecord {
        ResultRecord {
            consignment_number: number.to_string(),
            status,
            message: "ok".to_string(),
            tracking_url: None,
            pdf_url: None,
            screenshot_url: None,
        }
    }

    fn flow_with_file() -> Flow {
        let mut flow = Flow::new();
        flow.select_file(csv("report.csv"), "report-bytes").unwrap();
        flow
    }

    #[test]
    fn test_initial_state() {
        let flow = Flow::new();
        assert!(flow.is_idle());
        assert!(!flow.is_processing());
        assert_eq!(flow.progress(), 0);
        assert_eq!(flow.progress_label(), IDLE_LABEL);
        assert!(flow.results().is_empty());
        assert!(flow.stats().is_empty());
    }

    #[test]
    fn test_accepted_mime_types() {
        assert!(is_accepted_mime("text/csv"));
        assert!(is_accepted_mime("application/vnd.ms-excel"));
        assert!(is_accepted_mime(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ));
        assert!(!is_accepted_mime(""));
        assert!(!is_accepted_mime("application/pdf"));
        assert!(!is_accepted_mime("TEXT/CSV"));
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let mut flow = flow_with_file();

        let err = flow
            .select_file(FileMeta::new("photo.png", "image/png", 10), "png-bytes")
            .unwrap_err();

        assert_eq!(
            err,
            AppError::UnsupportedFileType {
                mime: "image/png".into()
            }
        );
        assert_eq!(flow.selected_name().as_deref(), Some("report.csv"));
        assert!(flow.selection_rejected());

        flow.select_file(csv("other.csv"), "other").unwrap();
        assert!(!flow.selection_rejected());
        assert_eq!(flow.selected_name().as_deref(), Some("other.csv"));
    }

    #[test]
    fn test_clear_selection() {
        let mut flow = flow_with_file();
        flow.clear_selection().unwrap();
        assert!(flow.selection().is_none());
        assert_eq!(flow.begin_submit().unwrap_err(), AppError::NoFileSelected);
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email(" "));
    }

    #[test]
    fn test_submit_without_file_is_refused() {
        let mut flow = Flow::new();
        assert_eq!(flow.begin_submit().unwrap_err(), AppError::NoFileSelected);
        assert!(flow.is_idle());
        assert_eq!(flow.progress(), 0);
    }

    #[test]
    fn test_invalid_email_blocks_submit_and_keeps_selection() {
        let mut flow = flow_with_file();
        flow.set_email("not-an-email");

        assert_eq!(flow.begin_submit().unwrap_err(), AppError::InvalidEmailFormat);
        assert!(flow.is_idle());
        assert_eq!(flow.selected_name().as_deref(), Some("report.csv"));

        flow.set_email("a@b.com");
        let submission = flow.begin_submit().unwrap();
        assert_eq!(submission.email.as_deref(), Some("a@b.com"));
        assert_eq!(submission.file, "report-bytes");
        assert_eq!(submission.file_name, "report.csv");
    }

    #[test]
    fn test_begin_submit_enters_uploading() {
        let mut flow = flow_with_file();
        let submission = flow.begin_submit().unwrap();

        assert_eq!(submission.email, None);
        assert_eq!(
            flow.phase(),
            Phase::Uploading {
                ticket: submission.ticket
            }
        );
        assert!(flow.is_processing());
        assert_eq!(flow.progress(), INITIAL_UPLOAD_PERCENT);
        assert_eq!(flow.progress_label(), UPLOAD_STARTED_LABEL);
    }

    #[test]
    fn test_second_submit_is_busy_until_settled() {
        let mut flow = flow_with_file();
        let first = flow.begin_submit().unwrap();
        assert_eq!(flow.begin_submit().unwrap_err(), AppError::Busy);

        flow.complete(first.ticket, Ok(UploadResponse::default()));
        assert!(!flow.is_processing());
        assert_eq!(flow.begin_submit().unwrap_err(), AppError::Busy);

        flow.settle(first.ticket);
        let second = flow.begin_submit().unwrap();
        assert!(second.ticket > first.ticket);
    }

    #[test]
    fn test_selection_locked_while_uploading() {
        let mut flow = flow_with_file();
        flow.begin_submit().unwrap();

        assert_eq!(
            flow.select_file(csv("late.csv"), "late").unwrap_err(),
            AppError::Busy
        );
        assert_eq!(flow.clear_selection().unwrap_err(), AppError::Busy);
        assert_eq!(flow.selected_name().as_deref(), Some("report.csv"));
    }

    #[test]
    fn test_progress_never_decreases() {
        let mut flow = flow_with_file();
        let ticket = flow.begin_submit().unwrap().ticket;

        let mut seen = vec![flow.progress()];
        for percent in [5, 30, 30, 20, 75, 180] {
            flow.record_progress(ticket, percent);
            seen.push(flow.progress());
        }

        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(flow.progress(), 100);
        assert_eq!(flow.progress_label(), "Uploading... 100%");
    }

    #[test]
    fn test_progress_label_tracks_percent() {
        let mut flow = flow_with_file();
        let ticket = flow.begin_submit().unwrap().ticket;
        flow.record_progress(ticket, 42);
        assert_eq!(flow.progress(), 42);
        assert_eq!(flow.progress_label(), "Uploading... 42%");
    }

    #[test]
    fn test_success_replaces_results() {
        let mut flow = flow_with_file();
        let ticket = flow.begin_submit().unwrap().ticket;
        let notice = flow
            .complete(
                ticket,
                Ok(UploadResponse {
                    message: Some("Processed".into()),
                    results: Some(vec![
                        record("A", ResultStatus::Success),
                        record("B", ResultStatus::Error),
                    ]),
                }),
            )
            .unwrap();

        assert_eq!(notice, Notice::success("Processed"));
        assert_eq!(flow.progress(), 100);
        assert_eq!(flow.progress_label(), UPLOAD_DONE_LABEL);
        assert_eq!(
            flow.stats(),
            StatsSummary {
                total: 2,
                success: 1,
                failed: 1
            }
        );

        flow.settle(ticket);
        let ticket = flow.begin_submit().unwrap().ticket;
        flow.complete(
            ticket,
            Ok(UploadResponse {
                message: None,
                results: Some(vec![record("C", ResultStatus::Success)]),
            }),
        );
        assert_eq!(flow.results().len(), 1);
        assert_eq!(flow.results()[0].consignment_number, "C");
    }

    #[test]
    fn test_success_without_message_uses_fallback() {
        let mut flow = flow_with_file();
        let ticket = flow.begin_submit().unwrap().ticket;
        let notice = flow.complete(ticket, Ok(UploadResponse::default())).unwrap();
        assert_eq!(notice, Notice::success(UPLOAD_DONE_FALLBACK));
    }

    #[test]
    fn test_success_without_results_keeps_previous_results() {
        let mut flow = flow_with_file();
        let ticket = flow.begin_submit().unwrap().ticket;
        flow.complete(
            ticket,
            Ok(UploadResponse {
                message: None,
                results: Some(vec![record("A", ResultStatus::Success)]),
            }),
        );
        flow.settle(ticket);

        let ticket = flow.begin_submit().unwrap().ticket;
        flow.complete(ticket, Ok(UploadResponse::default()));
        assert_eq!(flow.results().len(), 1);
    }

    #[test]
    fn test_failure_leaves_results_untouched() {
        let mut flow = flow_with_file();
        let ticket = flow.begin_submit().unwrap().ticket;
        flow.complete(
            ticket,
            Ok(UploadResponse {
                message: None,
                results: Some(vec![
                    record("A", ResultStatus::Success),
                    record("B", ResultStatus::Error),
                ]),
            }),
        );
        flow.settle(ticket);
        let before = (flow.results().to_vec(), flow.stats());

        let ticket = flow.begin_submit().unwrap().ticket;
        let notice = flow
            .complete(
                ticket,
                Err(AppError::Transport {
                    status: Some(500),
                    message: "Server exploded".into(),
                }),
            )
            .unwrap();

        assert_eq!(notice, Notice::error("Upload error: Server exploded"));
        assert_eq!((flow.results().to_vec(), flow.stats()), before);
        assert!(!flow.is_processing());
    }

    #[test]
    fn test_settle_resets_progress_and_label() {
        let mut flow = flow_with_file();
        let ticket = flow.begin_submit().unwrap().ticket;
        flow.complete(ticket, Ok(UploadResponse::default()));

        assert_eq!(flow.progress_label(), UPLOAD_DONE_LABEL);

        flow.settle(ticket);
        assert!(flow.is_idle());
        assert_eq!(flow.progress(), 0);
        assert_eq!(flow.progress_label(), IDLE_LABEL);
    }

    #[test]
    fn test_stale_ticket_events_are_ignored() {
        let mut flow = flow_with_file();
        let first = flow.begin_submit().unwrap().ticket;
        flow.complete(first, Ok(UploadResponse::default()));
        flow.settle(first);

        let second = flow.begin_submit().unwrap().ticket;
        flow.record_progress(first, 90);
        assert_eq!(flow.progress(), INITIAL_UPLOAD_PERCENT);
        assert_eq!(flow.complete(first, Ok(UploadResponse::default())), None);
        flow.settle(first);
        assert_eq!(flow.phase(), Phase::Uploading { ticket: second });
    }
}
