//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Metadata of the user's selection
//! - **API Types** - Upload endpoint response structures
//! - **Summary Types** - Aggregates derived from results
//! - **Notification Types** - Toast styling
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// What the client knows about a picked file without reading it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    /// File name as reported by the browser
    pub name: String,
    /// MIME type as reported by the browser (may be empty)
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Read the metadata of a browser file handle.
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size().max(0.0) as u64,
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Outcome of one consignment lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    /// Anything the server does not report as a success.
    #[serde(other)]
    Error,
}

impl ResultStatus {
    /// Badge label.
    pub fn label(&self) -> &'static str {
        match self {
            ResultStatus::Success => "Success",
            ResultStatus::Error => "Error",
        }
    }

    /// CSS class for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            ResultStatus::Success => "status-badge status-success",
            ResultStatus::Error => "status-badge status-error",
        }
    }

    /// Font Awesome icon shown next to the badge.
    pub fn icon(&self) -> &'static str {
        match self {
            ResultStatus::Success => "fas fa-check-circle",
            ResultStatus::Error => "fas fa-exclamation-triangle",
        }
    }
}

/// A single row of the tracking report.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub consignment_number: String,
    pub status: ResultStatus,
    pub message: String,
    #[serde(default)]
    pub tracking_url: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub screenshot_url: Option<String>,
}

impl ResultRecord {
    /// Labelled links present on this record, in display order.
    pub fn links(&self) -> Vec<(&'static str, String)> {
        [
            ("Tracking URL:", &self.tracking_url),
            ("PDF Link:", &self.pdf_url),
            ("Screenshot:", &self.screenshot_url),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_ref()
                .filter(|u| !u.is_empty())
                .map(|u| (label, u.clone()))
        })
        .collect()
    }
}

/// Response from `POST /upload-consignments`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Human readable status message
    #[serde(default)]
    pub message: Option<String>,
    /// Per-row results; absent when the server only acknowledges the upload
    #[serde(default)]
    pub results: Option<Vec<ResultRecord>>,
}

// =============================================================================
// Summary Types
// =============================================================================

/// Aggregate counts over a result list. Always derived, never edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

impl StatsSummary {
    pub fn from_results(results: &[ResultRecord]) -> Self {
        let total = results.len();
        let success = results
            .iter()
            .filter(|r| r.status == ResultStatus::Success)
            .count();
        Self {
            total,
            success,
            failed: total - success,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Visual flavour of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// The `Display` text is what the user sees in the error toast.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Submit pressed without a selection.
    #[error("Please select a file first.")]
    NoFileSelected,

    /// Email present but not shaped like `local@domain.tld`.
    #[error("If providing an email, please enter a valid one.")]
    InvalidEmailFormat,

    /// Selected file is not a spreadsheet.
    #[error("Invalid file type. Please upload Excel (XLS, XLSX) or CSV file.")]
    UnsupportedFileType { mime: String },

    /// A submission is still uploading or settling.
    #[error("A submission is already in progress.")]
    Busy,

    /// Network failure or non-2xx answer.
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    /// 2xx answer whose body is not the expected JSON.
    #[error("Malformed response from server: {0}")]
    MalformedResponse(String),
}

impl AppError {
    /// True for failures detected before any request is issued.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::NoFileSelected
                | AppError::InvalidEmailFormat
                | AppError::UnsupportedFileType { .. }
        )
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: &str, status: ResultStatus) -> ResultRecord {
        ResultRecord {
            consignment_number: number.to_string(),
            status,
            message: String::new(),
            tracking_url: None,
            pdf_url: None,
            screenshot_url: None,
        }
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "message": "Processed 2 consignments",
            "results": [
                {
                    "consignmentNumber": "CN123456",
                    "status": "success",
                    "message": "Delivered",
                    "trackingUrl": "https://track.example.com/CN123456",
                    "pdfUrl": "https://files.example.com/CN123456.pdf",
                    "screenshotUrl": "https://files.example.com/CN123456.png"
                },
                {
                    "consignmentNumber": "CN999999",
                    "status": "error",
                    "message": "Not found"
                }
            ]
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.as_deref(), Some("Processed 2 consignments"));

        let results = response.results.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].status, ResultStatus::Success);
        assert_eq!(results[0].links().len(), 3);
        assert_eq!(results[1].status, ResultStatus::Error);
        assert_eq!(results[1].tracking_url, None);
        assert!(results[1].links().is_empty());
    }

    #[test]
    fn test_unknown_status_counts_as_error() {
        let json = r#"{"consignmentNumber":"X1","status":"pending","message":"?"}"#;
        let record: ResultRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, ResultStatus::Error);
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let response: UploadResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, UploadResponse::default());
    }

    #[test]
    fn test_stats_from_mixed_results() {
        let results = vec![
            record("A", ResultStatus::Success),
            record("B", ResultStatus::Error),
        ];
        let stats = StatsSummary::from_results(&results);
        assert_eq!(
            stats,
            StatsSummary {
                total: 2,
                success: 1,
                failed: 1
            }
        );
        assert_eq!(stats.success + stats.failed, stats.total);
    }

    #[test]
    fn test_stats_empty() {
        let stats = StatsSummary::from_results(&[]);
        assert!(stats.is_empty());
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn test_empty_links_are_skipped() {
        let mut r = record("A", ResultStatus::Success);
        r.tracking_url = Some(String::new());
        r.pdf_url = Some("https://files.example.com/a.pdf".into());
        assert_eq!(
            r.links(),
            vec![("PDF Link:", "https://files.example.com/a.pdf".to_string())]
        );
    }

    #[test]
    fn test_validation_errors_are_flagged() {
        assert!(AppError::NoFileSelected.is_validation());
        assert!(AppError::InvalidEmailFormat.is_validation());
        assert!(AppError::UnsupportedFileType { mime: "image/png".into() }.is_validation());
        assert!(!AppError::Busy.is_validation());
        assert!(!AppError::MalformedResponse("eof".into()).is_validation());
    }
}
