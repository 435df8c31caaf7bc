//! Browser-facing services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`upload`] - Spreadsheet upload to the processing API
//! - [`orchestrator`] - Submission driver tying the upload to page state
//! - [`clipboard`] - Copy result links to the clipboard

pub mod clipboard;
pub mod orchestrator;
pub mod upload;

pub use clipboard::*;
pub use orchestrator::*;
pub use upload::*;
