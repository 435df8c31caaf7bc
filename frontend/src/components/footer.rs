//! Footer component

use chrono::Datelike;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            <p>
                "© " {year} " Consignment Processor. All rights reserved. "
                "Secure and efficient processing of your shipment data."
            </p>
        </footer>
    }
}
