//! Public landing page with platform counters.
//!
//! Counters come from the public stats endpoint and show zero when it is
//! unreachable.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use super::load::load_on_mount;
use crate::components::stat_card::StatCard;
use crate::net::api::fetch_stats;
use crate::net::types::PlatformStats;
use crate::util::clock::now_unix_secs;

const FEATURES: [(&str, &str); 3] = [
    ("Decentralized & Secure", "Uses blockchain to ensure document authenticity and prevent tampering."),
    ("User-Focused", "Upload, manage, and flag lost documents. Your identity, your control."),
    ("Authority-Verified", "Authorized bodies can issue and verify documents instantly and securely."),
];

/// Calendar year (UTC) of a unix timestamp, for the footer.
pub fn copyright_year(now: i64) -> i32 {
    time::OffsetDateTime::from_unix_timestamp(now).map_or(1970, |dt| dt.year())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = load_on_mount(fetch_stats, "");
    let counter = move |pick: fn(&PlatformStats) -> u64| {
        Signal::derive(move || Some(stats.with(|s| s.ready().map_or(0, pick)).to_string()))
    };

    view! {
        <div class="home">
            <header class="home__nav">
                <span class="home__brand">"DocuChain"</span>
                <nav>
                    <a href="#about">"About"</a>
                    <a href="#features">"Features"</a>
                    <a href="#stats">"Stats"</a>
                    <a href="#login">"Login"</a>
                </nav>
            </header>
            <section id="login" class="home__hero">
                <h1>"Welcome to DocuChain"</h1>
                <p>
                    "A decentralized platform for secure and verifiable document management. "
                    "Built for users and authorities to ensure transparency and trust."
                </p>
                <div class="home__cta">
                    <a class="button" href="/login">"Login as User"</a>
                    <a class="button button--outline" href="/login">"Login as Authority"</a>
                    <a class="button button--link" href="/register">"Register an Authority"</a>
                </div>
            </section>
            <section id="about" class="home__about">
                <h2>"What is DocuChain?"</h2>
                <p>
                    "DocuChain is a blockchain-powered system that allows users to upload and manage identity "
                    "documents while enabling authorities to issue and verify them."
                </p>
            </section>
            <section id="features" class="home__features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| view! {
                        <div class="feature-card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </section>
            <section id="stats" class="home__stats">
                <h2>"Live Stats"</h2>
                <div class="stat-grid">
                    <StatCard label="Documents Issued" value=counter(|s| s.documents_issued)/>
                    <StatCard label="Documents Verified" value=counter(|s| s.documents_verified)/>
                    <StatCard label="Authorities Registered" value=counter(|s| s.authorities_registered)/>
                </div>
            </section>
            <footer class="home__footer">
                {format!("© {} DocuChain. All rights reserved.", copyright_year(now_unix_secs()))}
            </footer>
        </div>
    }
}
