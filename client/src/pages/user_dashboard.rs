//! User landing page: document counts and quick actions.

use leptos::prelude::*;

use super::load::load_on_mount;
use crate::components::sidebar::DashboardLayout;
use crate::components::stat_card::{ActionCard, StatCard};
use crate::net::api::fetch_user_documents;
use crate::net::types::{UserCounts, UserDocuments};
use crate::state::auth::AuthState;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let documents = load_on_mount(fetch_user_documents, "Could not load your documents.");

    let count = move |pick: fn(UserCounts) -> usize| {
        Signal::derive(move || documents.with(|d| d.ready().map(|docs: &UserDocuments| pick(docs.counts()).to_string())))
    };
    let greeting = move || {
        auth.with(|s| s.display_name().map_or_else(|| "Welcome".to_owned(), |n| format!("Welcome, {n}")))
    };

    view! {
        <DashboardLayout title="User Dashboard">
            <p class="dashboard__greeting">{greeting}</p>
            {move || documents.with(|d| d.error().map(str::to_owned)).map(|e| view! { <p class="error-message">{e}</p> })}
            <div class="stat-grid">
                <StatCard label="Uploaded Documents" value=count(|c| c.uploaded)/>
                <StatCard label="Issued To Me" value=count(|c| c.issued_to_me)/>
                <StatCard label="Flagged" value=count(|c| c.flagged)/>
            </div>
            <div class="action-grid">
                <ActionCard title="Upload Document" description="Store a personal document on IPFS." href="/user/upload"/>
                <ActionCard title="My Documents" description="Browse uploaded and issued documents." href="/user/my-documents"/>
                <ActionCard title="Flag Document" description="Mark a lost or stolen document." href="/user/flag"/>
            </div>
        </DashboardLayout>
    }
}
