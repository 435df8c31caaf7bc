//! Application configuration.
//!
//! Centralized configuration for the Consignment Processor client.
//! A browser bundle has no runtime environment, so the API base URL is
//! baked in at build time from `CONSIGNMENT_API_URL` (e.g.
//! `CONSIGNMENT_API_URL=https://api.example.com/api trunk build --release`).

/// Fallback API base URL when `CONSIGNMENT_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Path of the single endpoint this client talks to.
pub const UPLOAD_PATH: &str = "/upload-consignments";

/// MIME types accepted for upload (`.xls`, `.xlsx`, `.csv`).
pub const ACCEPTED_MIME_TYPES: [&str; 3] = [
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/csv",
];

/// Extension hint for the file picker and the help card.
pub const ACCEPT_HINT: &str = ".xlsx, .xls, .csv";

/// Grace period before the progress bar resets after a submission.
pub const SETTLE_DELAY_MS: u32 = 3000;

/// Default lifetime of a toast notification.
pub const TOAST_DURATION_MS: u32 = 5000;

/// Progress shown as soon as an upload starts.
pub const INITIAL_UPLOAD_PERCENT: u8 = 10;

/// Document title.
pub const APP_TITLE: &str = "Consignment Processor | Professional Tracking Solution";

/// Resolve the API base URL from the build environment.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("CONSIGNMENT_API_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_URL,
    }
}

/// Full URL of the upload endpoint for a given base.
pub fn upload_endpoint(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), UPLOAD_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_configuration_falls_back_to_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_URL);
        assert_eq!(
            resolve_base_url(Some("https://api.example.com")),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_upload_endpoint_joins_with_single_slash() {
        assert_eq!(
            upload_endpoint("http://localhost:3001/api"),
            "http://localhost:3001/api/upload-consignments"
        );
        assert_eq!(
            upload_endpoint("https://api.example.com/"),
            "https://api.example.com/upload-consignments"
        );
    }
}
