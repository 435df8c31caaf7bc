//! Client-side state, kept free of browser APIs.
//!
//! # State
//!
//! - [`flow`] - Upload/progress/result state machine
//! - [`toasts`] - Transient notification list

pub mod flow;
pub mod toasts;

pub use flow::*;
pub use toasts::*;
