//! One-shot data loading for list and dashboard pages.
//!
//! DESIGN
//! ======
//! Each page fetches once on mount and renders from a page-local signal.
//! Nothing is cached between visits.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;

/// Fetch state of a page's backing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    /// Settle a finished request, showing `fallback` when the backend gave
    /// no message of its own.
    pub fn settle(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.user_message(fallback)),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Start `fetch` once and expose its state. Stays `Loading` during SSR.
pub fn load_on_mount<T, F, Fut>(fetch: F, fallback: &'static str) -> RwSignal<Load<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(Load::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch().await;
        if let Err(e) = &result {
            log::warn!("page load failed: {e}");
        }
        state.set(Load::settle(result, fallback));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (fetch, fallback);

    state
}
