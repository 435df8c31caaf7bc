//! UI Components for the Consignment Processor.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Page title and description
//! - [`HowItWorks`] - Static usage guide
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ProcessCard`] - Email, file picker, submit button and progress
//! - [`FileUploadArea`] - Spreadsheet selection with drag & drop
//! - [`ProgressBar`] - Upload progress indicator
//! - [`StatsRow`] - Total / success / failed counters
//! - [`ResultsPanel`] - Per-consignment results
//! - [`ToastHost`] - Transient notifications

mod footer;
mod hero;
mod how_it_works;
mod process;
mod progress;
mod results;
mod stats;
mod toast;
mod upload;

pub use footer::*;
pub use hero::*;
pub use how_it_works::*;
pub use process::*;
pub use progress::*;
pub use results::*;
pub use stats::*;
pub use toast::*;
pub use upload::*;
