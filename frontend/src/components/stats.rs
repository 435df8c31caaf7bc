//! Aggregate counters shown above the results.

use leptos::*;

use crate::types::StatsSummary;

/// One counter tile.
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<usize>,
    /// Font Awesome icon class
    icon: &'static str,
    /// Accent class for the icon bubble
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class=format!("stat-icon {}", color)>
                <i class=icon></i>
            </div>
            <span class="stat-value">{move || value.get().to_string()}</span>
            <span class="stat-title">{title}</span>
        </div>
    }
}

#[component]
pub fn StatsRow(#[prop(into)] stats: Signal<StatsSummary>) -> impl IntoView {
    view! {
        <div class="stats-row">
            <StatCard
                title="Total"
                value=Signal::derive(move || stats.get().total)
                icon="fas fa-boxes"
                color="stat-total"
            />
            <StatCard
                title="Success"
                value=Signal::derive(move || stats.get().success)
                icon="fas fa-check-circle"
                color="stat-success"
            />
            <StatCard
                title="Failed"
                value=Signal::derive(move || stats.get().failed)
                icon="fas fa-exclamation-circle"
                color="stat-failed"
            />
        </div>
    }
}
