//! Authority landing page: issuance counts and quick actions.

#[cfg(test)]
#[path = "authority_dashboard_test.rs"]
mod authority_dashboard_test;

use leptos::prelude::*;

use super::load::load_on_mount;
use crate::components::sidebar::DashboardLayout;
use crate::components::stat_card::{ActionCard, StatCard};
use crate::net::api::fetch_authority_documents;
use crate::net::types::{Document, flagged_count};
use crate::state::auth::AuthState;

/// Counters shown on the authority dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthorityCounts {
    pub issued: usize,
    pub flagged: usize,
}

pub fn authority_counts(issued: &[Document]) -> AuthorityCounts {
    AuthorityCounts { issued: issued.len(), flagged: flagged_count(issued) }
}

#[component]
pub fn AuthorityDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let documents = load_on_mount(fetch_authority_documents, "Could not load issued documents.");

    let count = move |pick: fn(AuthorityCounts) -> usize| {
        Signal::derive(move || documents.with(|d| d.ready().map(|docs| pick(authority_counts(docs)).to_string())))
    };
    let greeting = move || {
        auth.with(|s| s.display_name().map_or_else(|| "Welcome".to_owned(), |n| format!("Welcome, {n}")))
    };

    view! {
        <DashboardLayout title="Authority Dashboard">
            <p class="dashboard__greeting">{greeting}</p>
            {move || documents.with(|d| d.error().map(str::to_owned)).map(|e| view! { <p class="error-message">{e}</p> })}
            <div class="stat-grid">
                <StatCard label="Documents Issued" value=count(|c| c.issued)/>
                <StatCard label="Flagged" value=count(|c| c.flagged)/>
            </div>
            <div class="action-grid">
                <ActionCard title="Issue Document" description="Issue a document to a receiver." href="/authority/issue"/>
                <ActionCard title="Issued Documents" description="Review documents you have issued." href="/authority/issued-documents"/>
                <ActionCard title="Verify Document" description="Check a document against the ledger." href="/authority/verify"/>
            </div>
        </DashboardLayout>
    }
}
