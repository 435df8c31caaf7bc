//! Consignment Processor - Frontend Rust/Leptos Application
//!
//! A WebAssembly client for uploading consignment spreadsheets and
//! reviewing the per-row tracking report returned by the processing API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the UploadFlow signal)                    │
//! │  ├── Hero (title, description)                               │
//! │  ├── ProcessCard (email, FileUploadArea, submit, progress)   │
//! │  ├── HowItWorks                                              │
//! │  ├── StatsRow (when results exist)                           │
//! │  └── ResultsPanel (when results exist)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! │  ToastHost                                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ResultRecord, StatsSummary, AppError, etc.)
//! - [`state`] - Upload flow state machine and toast queue
//! - [`components`] - UI components
//! - [`services`] - Upload transport, submission driver, clipboard

use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileMeta,
    // API
    ResultRecord, ResultStatus, UploadResponse,
    // Summary
    StatsSummary,
    // Notifications
    ToastKind,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{Notify, Phase, ToastQueue, UploadFlow};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install browser hooks and mount the application.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🚚 Consignment Processor - Starting Leptos App");
    log::debug!("Upload endpoint: {}", upload_endpoint(api_base_url()));

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Meta
            name="description"
            content="Upload your Excel or CSV file with consignment numbers and receive a detailed tracking report"
        />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Notifications are scoped to this view, not global
    provide_context(Toaster::new());

    // Single owner of all page state
    let flow = create_rw_signal(UploadFlow::<File>::new());
    let stats = create_memo(move |_| flow.with(|f| f.stats()));
    let results = Signal::derive(move || flow.with(|f| f.results().to_vec()));

    view! {
        <div class="container">
            <Hero/>

            <div class="layout-grid">
                <ProcessCard flow=flow/>
                <HowItWorks/>
            </div>

            <Show
                when=move || !stats.get().is_empty()
                fallback=|| view! { }
            >
                <StatsRow stats=stats/>
            </Show>

            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=|| view! { }
            >
                <ResultsPanel results=results/>
            </Show>

            <Footer/>
        </div>

        <ToastHost/>
    }
}
